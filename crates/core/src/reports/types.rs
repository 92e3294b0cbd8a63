//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::DerivedDailyRecord;
use crate::period::MonthKey;

/// Monthly detail: one row per entry with its running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month covered.
    pub month: MonthKey,
    /// Balance the month opens with.
    pub opening_balance: Decimal,
    /// Daily rows, oldest first.
    pub records: Vec<DerivedDailyRecord>,
    /// Totals over `records`.
    pub totals: MonthlyTotals,
}

/// Totals for a [`MonthlyReport`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Sum of income.
    pub total_income: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_result: Decimal,
    /// Running balance after the last row, zero for an empty month.
    pub final_balance: Decimal,
}

impl MonthlyReport {
    /// Returns true if the month has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
