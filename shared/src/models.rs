use serde::{Serialize, Deserialize};
use time::OffsetDateTime;

use crate::item_id::ItemId;

pub const NEWS: &str = "news";
pub const COMMENT: &str = "comment";
pub const ISSUE: &str = "issue";

/// News predates typed votes, so untyped rows belong to it.
pub const LEGACY_CATEGORY: &str = NEWS;

pub fn includes_untyped(category: &str) -> bool {
    category == LEGACY_CATEGORY
}

/// Whether a stored vote's type belongs to `category` on the read path.
pub fn item_type_matches(category: &str, item_type: Option<&str>) -> bool {
    match item_type {
        Some(item_type) => item_type == category,
        None => includes_untyped(category),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub item: ItemId,
    pub voter: String,
    pub amount: i32,
    pub item_type: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub cast_at: OffsetDateTime,
}

impl Vote {
    pub fn new(item: ItemId, voter: impl Into<String>, amount: i32, item_type: impl Into<String>) -> Self {
        Self {
            item,
            voter: voter.into(),
            amount,
            item_type: Some(item_type.into()),
            cast_at: OffsetDateTime::now_utc(),
        }
    }

    /// A row written before votes carried a category.
    pub fn untyped(item: ItemId, voter: impl Into<String>, amount: i32) -> Self {
        Self {
            item,
            voter: voter.into(),
            amount,
            item_type: None,
            cast_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Raw vote form as submitted, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub id: String,
    pub amount: Option<String>,
}

/// One flash notice, rendered by the next page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub msg: String,
}

impl Notice {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Either a single value or a list, remembering which one the caller passed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn is_many(&self) -> bool {
        matches!(self, OneOrMany::Many(_))
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    /// Applies `f` to every element and restores the original shape.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        Ok(match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)?),
            OneOrMany::Many(items) => OneOrMany::Many(
                items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?
            ),
        })
    }

    pub fn one(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(_) => None,
        }
    }

    pub fn many(self) -> Option<Vec<T>> {
        match self {
            OneOrMany::One(_) => None,
            OneOrMany::Many(items) => Some(items),
        }
    }
}

impl From<ItemId> for OneOrMany<ItemId> {
    fn from(id: ItemId) -> Self {
        OneOrMany::One(id)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}
