use std::collections::HashMap;
use shared::models::{COMMENT, ISSUE, NEWS};

pub const DEFAULT_SIGNUP_PATH: &str = "/signup";
pub const DEFAULT_ROOT: &str = "/";

/// Where vote submissions send the user when there is no referrer to go back to.
#[derive(Debug, Clone)]
pub struct VotingConfig {
    pub signup_path: String,
    pub default_root: String,
    pub roots: HashMap<String, String>,
}

impl Default for VotingConfig {
    fn default() -> Self {
        let roots = [(NEWS, "/news"), (COMMENT, "/news"), (ISSUE, "/issues")]
            .into_iter()
            .map(|(category, root)| (category.to_string(), root.to_string()))
            .collect();

        Self {
            signup_path: DEFAULT_SIGNUP_PATH.into(),
            default_root: DEFAULT_ROOT.into(),
            roots,
        }
    }
}

impl VotingConfig {
    /// Builds the config from a key lookup such as the deployment's secret store.
    ///
    /// Reads `SIGNUP_PATH`, `DEFAULT_VOTE_ROOT` and `VOTE_ROOT_<CATEGORY>` for each
    /// known category; anything unset keeps its default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = present("SIGNUP_PATH") {
            config.signup_path = path;
        }
        if let Some(root) = present("DEFAULT_VOTE_ROOT") {
            config.default_root = root;
        }
        for category in [NEWS, COMMENT, ISSUE] {
            let key = format!("VOTE_ROOT_{}", category.to_uppercase());
            if let Some(root) = present(&key) {
                config.roots.insert(category.to_string(), root);
            }
        }
        config
    }

    pub fn root_for(&self, category: &str) -> &str {
        self.roots.get(category).map(String::as_str).unwrap_or(&self.default_root)
    }
}
