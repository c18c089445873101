use std::sync::Arc;
use shared::{models::*, ItemId};
use crate::{error::StoreError, store::VoteStore};

/// Fetches every vote of `category` cast on the given item(s).
///
/// Reading `news` also returns untyped legacy votes. Results are not filtered
/// by voter and come back in no particular order.
pub async fn retrieve_votes_for(
    store: &dyn VoteStore,
    category: &str,
    ids: impl Into<OneOrMany<ItemId>>,
) -> Result<Vec<Vote>, StoreError> {
    let ids = ids.into();
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    store.find(category, ids.as_slice()).await
}

/// A reader bound to one category, for reuse as a pipeline stage.
#[derive(Clone)]
pub struct VoteReader {
    store: Arc<dyn VoteStore>,
    category: String,
}

impl VoteReader {
    pub fn for_category(store: Arc<dyn VoteStore>, category: impl Into<String>) -> Self {
        Self { store, category: category.into() }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub async fn retrieve(&self, ids: impl Into<OneOrMany<ItemId>>) -> Result<Vec<Vote>, StoreError> {
        retrieve_votes_for(self.store.as_ref(), &self.category, ids).await
    }
}
