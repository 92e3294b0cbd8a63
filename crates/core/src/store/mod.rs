//! Entry Store port.
//!
//! The submission flow and the report views only talk to storage through
//! [`EntryStore`]. Postgres lives behind it in `laundry-db`; tests and the
//! demo seeder can use [`MemoryEntryStore`].

mod memory;

pub use memory::MemoryEntryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use laundry_shared::AppError;
use laundry_shared::types::UserId;
use thiserror::Error;

use crate::entry::{DailyEntry, NewDailyEntry};

/// Errors raised by store adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached or the query failed.
    #[error("entry store unavailable: {0}")]
    Transport(String),

    /// The backend refused the operation.
    #[error("entry store refused the operation: {0}")]
    Permission(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Sort order on the entry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Persistence port for daily entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persists a new entry and returns it with its assigned id and timestamp.
    async fn insert(&self, entry: NewDailyEntry) -> Result<DailyEntry, StoreError>;

    /// Entries owned by `user_id`, ordered by date, optionally truncated.
    async fn query_by_user(
        &self,
        user_id: UserId,
        direction: SortDirection,
        limit: Option<u64>,
    ) -> Result<Vec<DailyEntry>, StoreError>;

    /// Entries owned by `user_id` with `start <= date <= end`, oldest first.
    async fn query_by_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyEntry>, StoreError>;
}
