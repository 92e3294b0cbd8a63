use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use laundry_shared::types::{DailyEntryId, UserId};

use super::{EntryStore, SortDirection, StoreError};
use crate::entry::{DailyEntry, NewDailyEntry};

/// In-process [`EntryStore`] backed by a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Mutex<Vec<DailyEntry>>,
}

impl MemoryEntryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries(entries: Vec<DailyEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn owned_by(&self, user_id: UserId) -> Result<Vec<DailyEntry>, StoreError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let mut owned: Vec<DailyEntry> = guard
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        // Same-day entries keep submission order.
        owned.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(owned)
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert(&self, entry: NewDailyEntry) -> Result<DailyEntry, StoreError> {
        let stored = entry.into_entry(DailyEntryId::new(), Utc::now());
        self.entries
            .lock()
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .push(stored.clone());
        Ok(stored)
    }

    async fn query_by_user(
        &self,
        user_id: UserId,
        direction: SortDirection,
        limit: Option<u64>,
    ) -> Result<Vec<DailyEntry>, StoreError> {
        let mut owned = self.owned_by(user_id)?;
        if direction == SortDirection::Descending {
            owned.reverse();
        }
        if let Some(limit) = limit {
            owned.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(owned)
    }

    async fn query_by_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyEntry>, StoreError> {
        let mut owned = self.owned_by(user_id)?;
        owned.retain(|entry| entry.date >= start && entry.date <= end);
        Ok(owned)
    }
}
