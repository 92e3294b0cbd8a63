//! Carry-forward running balance calculations.
//!
//! A report view never trusts the `result` snapshots stored on entries for its
//! running balance. It starts from a seed balance and walks the entries once,
//! adding `income - expenses` per day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entry::DailyEntry;

/// A daily row in a report, with the balance carried forward through that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedDailyRecord {
    /// Calendar date of the underlying entry.
    pub date: NaiveDate,
    /// Income for the day.
    pub income: Decimal,
    /// Expenses for the day.
    pub expenses: Decimal,
    /// `income - expenses` for the day.
    pub daily_result: Decimal,
    /// Cumulative balance through this day.
    pub running_balance: Decimal,
}

/// Computes running balances over `entries`, starting from `seed`.
///
/// `entries` must already be sorted ascending by date; this is a single
/// forward pass and does not sort. No rounding is applied.
#[must_use]
pub fn carry_forward(entries: &[DailyEntry], seed: Decimal) -> Vec<DerivedDailyRecord> {
    entries
        .iter()
        .scan(seed, |running, entry| {
            let daily_result = entry.daily_net();
            *running += daily_result;
            Some(DerivedDailyRecord {
                date: entry.date,
                income: entry.income,
                expenses: entry.expenses,
                daily_result,
                running_balance: *running,
            })
        })
        .collect()
}

/// Balance after the last record, or zero when there are none.
#[must_use]
pub fn final_balance(records: &[DerivedDailyRecord]) -> Decimal {
    records
        .last()
        .map_or(Decimal::ZERO, |record| record.running_balance)
}

/// Resolves the seed balance for a report period.
///
/// `boundary` is the earliest entry dated at or after the period start (and
/// inside the period). Its own `previous_balance` snapshot is the balance the
/// period opens with. Without such an entry the period opens at zero.
///
/// Entries dated before the period are deliberately not consulted.
#[must_use]
pub fn resolve_period_seed(boundary: Option<&DailyEntry>) -> Decimal {
    boundary.map_or(Decimal::ZERO, |entry| entry.previous_balance)
}

/// Resolves the previous balance for a new submission.
///
/// `latest` is the user's most recent entry by date; its `result` snapshot
/// becomes the new entry's `previous_balance`. No prior entry means zero.
#[must_use]
pub fn resolve_submission_seed(latest: Option<&DailyEntry>) -> Decimal {
    latest.map_or(Decimal::ZERO, |entry| entry.result)
}
