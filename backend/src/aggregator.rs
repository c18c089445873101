use std::sync::Arc;
use serde::Serialize;
use shared::{add_votes_to_item, item_id_of, models::*, Member, Tallied};
use crate::{error::AggregateError, reader::retrieve_votes_for, store::VoteStore};

/// Attaches `votes` and `votedFor` to one item or a list of items.
///
/// Identifiers are read from `id_property` of each item's plain-data form and
/// looked up with a single read, whatever the number of items. The result has
/// the same shape as `items`.
pub async fn add_votes_for<T: Serialize>(
    store: &dyn VoteStore,
    category: &str,
    id_property: &str,
    items: OneOrMany<T>,
    member: Option<&Member>,
) -> Result<OneOrMany<Tallied>, AggregateError> {
    let ids = items
        .as_slice()
        .iter()
        .map(|item| item_id_of(item, id_property))
        .collect::<shared::Result<Vec<_>>>()?;

    let votes = retrieve_votes_for(store, category, ids.clone()).await?;

    let mut ids = ids.into_iter();
    let tallied = items.try_map(|item| {
        let id = ids.next().ok_or_else(|| {
            shared::Error::new(shared::ErrorCode::SystemError, "Item identifiers out of step")
        })?;
        add_votes_to_item(&item, &id, member, &votes)
    })?;

    Ok(tallied)
}

/// Aggregator bound to a category and id property.
#[derive(Clone)]
pub struct VoteAggregator {
    store: Arc<dyn VoteStore>,
    category: String,
    id_property: String,
}

impl VoteAggregator {
    pub fn bind(store: Arc<dyn VoteStore>, category: impl Into<String>, id_property: impl Into<String>) -> Self {
        Self {
            store,
            category: category.into(),
            id_property: id_property.into(),
        }
    }

    pub async fn tally<T: Serialize>(
        &self,
        items: OneOrMany<T>,
        member: Option<&Member>,
    ) -> Result<OneOrMany<Tallied>, AggregateError> {
        add_votes_for(self.store.as_ref(), &self.category, &self.id_property, items, member).await
    }
}
