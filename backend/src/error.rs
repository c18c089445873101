use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Vote already exists for this item")]
    Duplicate,
    #[error("Vote store lock poisoned")]
    LockFailed,
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate,
            _ => StoreError::Database(e.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid item: {0}")]
    Item(#[from] shared::Error),
}
