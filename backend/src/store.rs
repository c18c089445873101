use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use shared::{models::*, ItemId};
use crate::error::StoreError;

/// Persistence port for votes.
///
/// Implementations must reject a second vote for the same item, voter and
/// category with [`StoreError::Duplicate`]; nothing above the store coordinates
/// concurrent submissions.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert(&self, vote: &Vote) -> Result<(), StoreError>;

    /// All votes of `category` cast on any of `items`.
    async fn find(&self, category: &str, items: &[ItemId]) -> Result<Vec<Vote>, StoreError>;
}

type VoteKey = (String, String, Option<String>);

#[derive(Default)]
pub struct MemoryVoteStore {
    votes: Mutex<HashMap<VoteKey, Vote>>,
    reads: AtomicUsize,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a vote, bypassing the uniqueness check. Used for legacy rows.
    pub fn with_vote(self, vote: Vote) -> Self {
        if let Ok(mut votes) = self.votes.lock() {
            votes.insert(Self::key(&vote), vote);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.votes.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all(&self) -> Vec<Vote> {
        self.votes.lock().map(|v| v.values().cloned().collect()).unwrap_or_default()
    }

    /// Number of `find` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn key(vote: &Vote) -> VoteKey {
        (vote.item.canonical(), vote.voter.clone(), vote.item_type.clone())
    }
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn insert(&self, vote: &Vote) -> Result<(), StoreError> {
        let mut votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        let key = Self::key(vote);
        if votes.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        votes.insert(key, vote.clone());
        Ok(())
    }

    async fn find(&self, category: &str, items: &[ItemId]) -> Result<Vec<Vote>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(votes
            .values()
            .filter(|vote| item_type_matches(category, vote.item_type.as_deref()))
            .filter(|vote| items.contains(&vote.item))
            .cloned()
            .collect())
    }
}
