pub mod error;
pub mod item_id;
pub mod models;
pub mod validation;
pub mod member;
pub mod tally;

pub use error::{Error, ErrorCode, Result};
pub use item_id::ItemId;
pub use models::*;
pub use validation::*;
pub use member::*;
pub use tally::{add_votes_to_item, item_id_of, Tallied};
