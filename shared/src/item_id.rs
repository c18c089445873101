use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Identifier of a votable item.
///
/// Items are keyed either by a structured id or by whatever string the caller
/// handed us. Equality, hashing and serialization all go through the
/// canonical string form, so a structured id and its text compare equal.
#[derive(Debug, Clone)]
pub enum ItemId {
    Structured(Uuid),
    Opaque(String),
}

impl ItemId {
    /// Best-effort coercion of a raw identifier. Never fails: anything that
    /// does not parse as a structured id is kept verbatim.
    pub fn coerce(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(id) => ItemId::Structured(id),
            Err(_) => ItemId::Opaque(raw.to_string()),
        }
    }

    pub fn canonical(&self) -> String {
        match self {
            ItemId::Structured(id) => id.hyphenated().to_string(),
            ItemId::Opaque(raw) => raw.clone(),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ItemId::Structured(_))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Structured(id) => write!(f, "{}", id.hyphenated()),
            ItemId::Opaque(raw) => f.write_str(raw),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        ItemId::Structured(id)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        ItemId::coerce(raw)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        ItemId::coerce(&raw)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ItemId::coerce(&raw))
    }
}
