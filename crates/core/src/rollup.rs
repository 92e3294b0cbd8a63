//! Monthly roll-up of daily entries.
//!
//! This is a plain sum per calendar month. Balances are not carried across
//! months here; see [`crate::balance`] for that.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entry::DailyEntry;
use crate::period::MonthKey;

/// Income and expense totals for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month summarised.
    pub month: MonthKey,
    /// Sum of income.
    pub total_income: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_result: Decimal,
    /// Number of entries folded into this summary.
    pub entry_count: u32,
}

impl MonthlySummary {
    /// A zeroed summary for `month`.
    #[must_use]
    pub const fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            net_result: Decimal::ZERO,
            entry_count: 0,
        }
    }

    fn add(&mut self, entry: &DailyEntry) {
        self.total_income += entry.income;
        self.total_expenses += entry.expenses;
        self.net_result = self.total_income - self.total_expenses;
        self.entry_count += 1;
    }
}

/// Groups entries by the calendar month of their stored date and sums them.
///
/// Input order does not matter and the output is unordered.
#[must_use]
pub fn roll_up(entries: &[DailyEntry]) -> HashMap<MonthKey, MonthlySummary> {
    entries
        .iter()
        .fold(HashMap::new(), |mut summaries, entry| {
            let month = MonthKey::from_date(entry.date);
            summaries
                .entry(month)
                .or_insert_with(|| MonthlySummary::empty(month))
                .add(entry);
            summaries
        })
}

/// Orders summaries for display, most recent month first.
#[must_use]
pub fn sorted_most_recent_first<S: std::hash::BuildHasher>(
    summaries: HashMap<MonthKey, MonthlySummary, S>,
) -> Vec<MonthlySummary> {
    let mut ordered: Vec<MonthlySummary> = summaries.into_values().collect();
    ordered.sort_by(|a, b| b.month.cmp(&a.month));
    ordered
}
