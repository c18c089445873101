use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use shared::{models::*, ItemId};
use crate::{error::StoreError, store::VoteStore};

#[derive(FromRow)]
struct VoteRow {
    item: String,
    voter: String,
    amount: i32,
    item_type: Option<String>,
    cast_at: OffsetDateTime,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Vote {
            item: ItemId::coerce(&row.item),
            voter: row.voter,
            amount: row.amount,
            item_type: row.item_type,
            cast_at: row.cast_at,
        }
    }
}

/// Postgres-backed vote store. Item ids are stored in canonical text form.
#[derive(Clone)]
pub struct PgVoteStore {
    pool: PgPool,
}

impl PgVoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteStore for PgVoteStore {
    async fn insert(&self, vote: &Vote) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO votes (item, voter, amount, item_type, cast_at)
             VALUES ($1, $2, $3, $4, $5)"
        )
        .bind(vote.item.canonical())
        .bind(&vote.voter)
        .bind(vote.amount)
        .bind(&vote.item_type)
        .bind(vote.cast_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, category: &str, items: &[ItemId]) -> Result<Vec<Vote>, StoreError> {
        let items: Vec<String> = items.iter().map(ItemId::canonical).collect();

        let rows = sqlx::query_as::<_, VoteRow>(
            "SELECT item, voter, amount, item_type, cast_at FROM votes
             WHERE item = ANY($1)
               AND (item_type = $2 OR ($3 AND item_type IS NULL))"
        )
        .bind(&items)
        .bind(category)
        .bind(includes_untyped(category))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Vote::from).collect())
    }
}
