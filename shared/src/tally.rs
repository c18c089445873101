use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, ErrorCode, Result};
use crate::item_id::ItemId;
use crate::member::Member;
use crate::models::Vote;

pub const VOTES_FIELD: &str = "votes";
pub const VOTED_FOR_FIELD: &str = "votedFor";

/// Plain-data copy of a votable item with its vote totals attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tallied {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub votes: i64,
    #[serde(rename = "votedFor", skip_serializing_if = "std::ops::Not::not")]
    pub voted_for: bool,
}

impl Tallied {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert(VOTES_FIELD.into(), Value::from(self.votes));
        if self.voted_for {
            fields.insert(VOTED_FOR_FIELD.into(), Value::Bool(true));
        }
        Value::Object(fields)
    }
}

fn plain_object<T: Serialize + ?Sized>(item: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(item)? {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::with_details(
            ErrorCode::InvalidInput,
            "Votable items must serialize to an object",
            other.to_string(),
        )),
    }
}

/// Reads the identifier stored under `id_property` of the item's plain-data form.
pub fn item_id_of<T: Serialize + ?Sized>(item: &T, id_property: &str) -> Result<ItemId> {
    let fields = plain_object(item)?;
    match fields.get(id_property) {
        Some(Value::String(raw)) => Ok(ItemId::coerce(raw)),
        Some(Value::Number(n)) => Ok(ItemId::Opaque(n.to_string())),
        Some(other) => Err(Error::with_details(
            ErrorCode::InvalidInput,
            format!("Item id property `{}` is not a string", id_property),
            other.to_string(),
        )),
        None => Err(Error::new(
            ErrorCode::MissingField,
            format!("Item has no `{}` property", id_property),
        )),
    }
}

/// Sums the votes cast on `item_id` and flags whether `member` is one of the voters.
///
/// The item itself is left untouched; the result is built from its plain-data form.
pub fn add_votes_to_item<T: Serialize + ?Sized>(
    item: &T,
    item_id: &ItemId,
    member: Option<&Member>,
    votes: &[Vote],
) -> Result<Tallied> {
    let mut fields = plain_object(item)?;
    fields.remove(VOTES_FIELD);
    fields.remove(VOTED_FOR_FIELD);

    let item_id = item_id.canonical();
    let member_id = member.map(|m| m.id.as_str()).filter(|id| !id.is_empty());

    let (total, voted_for) = votes
        .iter()
        .filter(|vote| vote.item.canonical() == item_id)
        .fold((0i64, false), |(total, voted), vote| {
            let mine = member_id.is_some_and(|id| vote.voter == id);
            (total + i64::from(vote.amount), voted || mine)
        });

    Ok(Tallied {
        fields,
        votes: total,
        voted_for,
    })
}
