use rocket::response::{Flash, Redirect};
use tracing::{error, info, warn};
use shared::{models::*, validate_submission, ItemId, Member, ValidationError};
use crate::{error::StoreError, store::VoteStore, utils::redirect_target};

pub const FLASH_ERRORS: &str = "errors";
pub const FLASH_SUCCESS: &str = "success";

pub const MEMBERS_ONLY: &str = "Only members can upvote items.";
pub const ALREADY_VOTED: &str = "You can only upvote an item once.";
pub const VOTE_RECORDED: &str = "Item upvoted. Awesome!";

/// Weight stored for an accepted submission; only upvotes can be cast.
const UPVOTE_WEIGHT: i32 = 1;

/// What happened to a vote submission, before it is mapped onto HTTP.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    Recorded,
    ValidationFailed(Vec<ValidationError>),
    Unauthorized,
    Duplicate,
    Failed,
}

/// Records votes of one category and knows where to send the user afterwards.
#[derive(Debug, Clone)]
pub struct VoteRecorder {
    category: String,
    root: String,
}

impl VoteRecorder {
    pub fn new(category: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            root: root.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub async fn submit(
        &self,
        store: &dyn VoteStore,
        submission: &VoteSubmission,
        member: Option<&Member>,
    ) -> VoteOutcome {
        if let Err(errors) = validate_submission(submission) {
            return VoteOutcome::ValidationFailed(errors);
        }

        let Some(member) = member else {
            return VoteOutcome::Unauthorized;
        };

        let vote = Vote::new(ItemId::coerce(&submission.id), member.id.as_str(), UPVOTE_WEIGHT, self.category.as_str());

        match store.insert(&vote).await {
            Ok(()) => {
                info!("Recorded {} vote on {} by {}", self.category, vote.item, member.id);
                VoteOutcome::Recorded
            }
            Err(StoreError::Duplicate) => {
                warn!("Duplicate {} vote on {} by {}", self.category, vote.item, member.id);
                VoteOutcome::Duplicate
            }
            Err(e) => {
                error!("Failed to record {} vote on {}: {}", self.category, vote.item, e);
                VoteOutcome::Failed
            }
        }
    }

    /// Where to send the user for `outcome` and what to flash on arrival.
    pub fn reply(&self, outcome: &VoteOutcome, referrer: Option<&str>, signup_path: &str) -> FlashReply {
        let back = redirect_target(referrer, &self.root);

        match outcome {
            VoteOutcome::Unauthorized => {
                FlashReply::new(signup_path, FLASH_ERRORS, vec![Notice::new(MEMBERS_ONLY)])
            }
            VoteOutcome::ValidationFailed(errors) => {
                let notices = errors.iter().map(|e| Notice::new(e.to_string())).collect();
                FlashReply::new(back, FLASH_ERRORS, notices)
            }
            VoteOutcome::Duplicate => FlashReply::new(back, FLASH_ERRORS, vec![Notice::new(ALREADY_VOTED)]),
            VoteOutcome::Failed => FlashReply::new(back, FLASH_ERRORS, Vec::new()),
            VoteOutcome::Recorded => FlashReply::new(back, FLASH_SUCCESS, vec![Notice::new(VOTE_RECORDED)]),
        }
    }

    pub fn respond(&self, outcome: &VoteOutcome, referrer: Option<&str>, signup_path: &str) -> Flash<Redirect> {
        self.reply(outcome, referrer, signup_path).into()
    }
}

/// A redirect plus the notices the next page should show.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashReply {
    pub target: String,
    pub kind: &'static str,
    pub notices: Vec<Notice>,
}

impl FlashReply {
    fn new(target: &str, kind: &'static str, notices: Vec<Notice>) -> Self {
        Self {
            target: target.to_string(),
            kind,
            notices,
        }
    }

    /// Notices encoded as the flash cookie message.
    pub fn message(&self) -> String {
        serde_json::to_string(&self.notices).unwrap_or_else(|_| "[]".into())
    }
}

impl From<FlashReply> for Flash<Redirect> {
    fn from(reply: FlashReply) -> Self {
        let message = reply.message();
        Flash::new(Redirect::to(reply.target), reply.kind, message)
    }
}
