//! Postgres-backed entry store.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use laundry_core::entry::{DailyEntry, NewDailyEntry};
use laundry_core::store::{EntryStore, SortDirection, StoreError};
use laundry_shared::types::{DailyEntryId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::error;

use crate::entities::daily_entries;

/// Daily entry repository implementing [`EntryStore`].
#[derive(Debug, Clone)]
pub struct DailyEntryRepository {
    db: DatabaseConnection,
}

impl DailyEntryRepository {
    /// Creates a new daily entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl daily_entries::Model {
    /// Converts a row into the domain entry.
    #[must_use]
    pub fn into_entry(self) -> DailyEntry {
        DailyEntry {
            id: DailyEntryId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            date: self.entry_date,
            income: self.income,
            expenses: self.expenses,
            previous_balance: self.previous_balance,
            result: self.result,
            created_at: self.created_at.with_timezone(&Utc),
        }
    }
}

fn store_error(err: DbErr) -> StoreError {
    error!(error = %err, "Entry store query failed");
    let message = err.to_string();
    if message.to_lowercase().contains("permission denied") {
        StoreError::Permission(message)
    } else {
        StoreError::Transport(message)
    }
}

const fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

#[async_trait]
impl EntryStore for DailyEntryRepository {
    async fn insert(&self, entry: NewDailyEntry) -> Result<DailyEntry, StoreError> {
        let row = daily_entries::ActiveModel {
            id: Set(DailyEntryId::new().into_inner()),
            user_id: Set(entry.user_id.into_inner()),
            entry_date: Set(entry.date),
            income: Set(entry.income),
            expenses: Set(entry.expenses),
            previous_balance: Set(entry.previous_balance),
            result: Set(entry.result),
            created_at: Set(Utc::now().into()),
        };

        row.insert(&self.db)
            .await
            .map(daily_entries::Model::into_entry)
            .map_err(store_error)
    }

    async fn query_by_user(
        &self,
        user_id: UserId,
        direction: SortDirection,
        limit: Option<u64>,
    ) -> Result<Vec<DailyEntry>, StoreError> {
        let rows = daily_entries::Entity::find()
            .filter(daily_entries::Column::UserId.eq(user_id.into_inner()))
            .order_by(daily_entries::Column::EntryDate, order(direction))
            .order_by(daily_entries::Column::CreatedAt, order(direction))
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(daily_entries::Model::into_entry).collect())
    }

    async fn query_by_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyEntry>, StoreError> {
        let rows = daily_entries::Entity::find()
            .filter(daily_entries::Column::UserId.eq(user_id.into_inner()))
            .filter(daily_entries::Column::EntryDate.between(start, end))
            .order_by_asc(daily_entries::Column::EntryDate)
            .order_by_asc(daily_entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(daily_entries::Model::into_entry).collect())
    }
}
