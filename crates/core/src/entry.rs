//! Daily income/expense entries.
//!
//! An entry is written once per submission and never updated afterwards. The
//! `previous_balance` and `result` fields are snapshots taken at submission
//! time; reports derive their own running balances instead of rewriting them.

use chrono::{DateTime, NaiveDate, Utc};
use laundry_shared::types::{DailyEntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exclusive bound on the magnitude of any stored amount or balance.
///
/// Money columns are `NUMERIC(19,4)`, which leaves 15 integer digits.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Decimal places an amount may carry.
pub const AMOUNT_SCALE: u32 = 2;

/// Returns true if `amount` fits the money columns.
#[must_use]
pub fn fits_storage(amount: Decimal) -> bool {
    amount.abs() < MAX_AMOUNT
}

/// A stored daily entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Unique identifier.
    pub id: DailyEntryId,
    /// Owner of the entry.
    pub user_id: UserId,
    /// Calendar date the entry is for.
    pub date: NaiveDate,
    /// Income for the day (non-negative).
    pub income: Decimal,
    /// Expenses for the day (non-negative).
    pub expenses: Decimal,
    /// Running balance immediately before this entry, as captured at submission.
    pub previous_balance: Decimal,
    /// `previous_balance + income - expenses`, as captured at submission.
    pub result: Decimal,
    /// When the entry was submitted.
    pub created_at: DateTime<Utc>,
}

impl DailyEntry {
    /// Net result of the day alone (`income - expenses`).
    #[must_use]
    pub fn daily_net(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// An entry that has been validated but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDailyEntry {
    /// Owner of the entry.
    pub user_id: UserId,
    /// Calendar date the entry is for.
    pub date: NaiveDate,
    /// Income for the day.
    pub income: Decimal,
    /// Expenses for the day.
    pub expenses: Decimal,
    /// Balance snapshot before this entry.
    pub previous_balance: Decimal,
    /// Balance snapshot after this entry.
    pub result: Decimal,
}

impl NewDailyEntry {
    /// Builds a new entry, computing `result` from the other fields.
    ///
    /// This is the only place `result` is computed. Returns `None` when the
    /// result does not fit the money columns.
    #[must_use]
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        income: Decimal,
        expenses: Decimal,
        previous_balance: Decimal,
    ) -> Option<Self> {
        let result = previous_balance
            .checked_add(income)?
            .checked_sub(expenses)
            .filter(|result| fits_storage(*result))?;
        Some(Self {
            user_id,
            date,
            income,
            expenses,
            previous_balance,
            result,
        })
    }

    /// Attaches the identity assigned by the store.
    #[must_use]
    pub fn into_entry(self, id: DailyEntryId, created_at: DateTime<Utc>) -> DailyEntry {
        DailyEntry {
            id,
            user_id: self.user_id,
            date: self.date,
            income: self.income,
            expenses: self.expenses,
            previous_balance: self.previous_balance,
            result: self.result,
            created_at,
        }
    }
}
