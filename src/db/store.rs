//! Storage abstraction for saved deals.

use crate::domain::{Deal, DealId};
use async_trait::async_trait;
use thiserror::Error;

/// Persistence of deal records.
///
/// Implementations are constructed explicitly and handed to whoever needs them;
/// there is no process-wide connection.
#[async_trait]
pub trait DealStore: Send + Sync {
    /// Insert or replace the deal with `deal.id`.
    async fn upsert_deal(&self, deal: &Deal) -> Result<(), StoreError>;

    /// Fetch a single deal.
    async fn get_deal(&self, id: &DealId) -> Result<Option<Deal>, StoreError>;

    /// All deals, most recently modified first.
    async fn list_deals(&self) -> Result<Vec<Deal>, StoreError>;

    /// Remove a deal. Returns whether anything was deleted.
    async fn delete_deal(&self, id: &DealId) -> Result<bool, StoreError>;

    /// Number of stored deals.
    async fn count_deals(&self) -> Result<i64, StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
