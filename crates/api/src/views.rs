//! JSON views returned by the API.
//!
//! Amounts are decimal strings with two places. Alongside them, `formatted`
//! carries the currency rendering shown to users.

use chrono::{DateTime, NaiveDate, Utc};
use laundry_core::balance::DerivedDailyRecord;
use laundry_core::entry::DailyEntry;
use laundry_core::period::MonthKey;
use laundry_core::reports::MonthlyReport;
use laundry_core::rollup::MonthlySummary;
use laundry_shared::types::{Currency, DailyEntryId, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Renders an amount as a two-place decimal string.
#[must_use]
pub fn amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn formatted(value: Decimal, currency: Currency) -> String {
    Money::new(value, currency).to_string()
}

/// A stored entry.
#[derive(Debug, Serialize)]
pub struct EntryView {
    /// Entry id.
    pub id: DailyEntryId,
    /// Entry date.
    pub date: NaiveDate,
    /// Income.
    pub income: String,
    /// Expenses.
    pub expenses: String,
    /// Balance snapshot before the entry.
    pub previous_balance: String,
    /// Balance snapshot after the entry.
    pub result: String,
    /// Currency renderings keyed like the amount fields.
    pub formatted: EntryFormatted,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

/// Currency renderings for [`EntryView`].
#[derive(Debug, Serialize)]
pub struct EntryFormatted {
    /// Income.
    pub income: String,
    /// Expenses.
    pub expenses: String,
    /// Previous balance.
    pub previous_balance: String,
    /// Result.
    pub result: String,
}

impl EntryView {
    /// Builds the view of `entry`.
    #[must_use]
    pub fn new(entry: &DailyEntry, currency: Currency) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            income: amount(entry.income),
            expenses: amount(entry.expenses),
            previous_balance: amount(entry.previous_balance),
            result: amount(entry.result),
            formatted: EntryFormatted {
                income: formatted(entry.income, currency),
                expenses: formatted(entry.expenses, currency),
                previous_balance: formatted(entry.previous_balance, currency),
                result: formatted(entry.result, currency),
            },
            created_at: entry.created_at,
        }
    }
}

/// One month in the summaries list.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    /// `YYYY-MM`.
    pub month: MonthKey,
    /// e.g. `January 2024`.
    pub label: String,
    /// Sum of income.
    pub total_income: String,
    /// Sum of expenses.
    pub total_expenses: String,
    /// Income minus expenses.
    pub net_result: String,
    /// Entries in the month.
    pub entry_count: u32,
    /// Currency rendering of `net_result`.
    pub formatted_net_result: String,
}

impl SummaryView {
    /// Builds the view of `summary`.
    #[must_use]
    pub fn new(summary: &MonthlySummary, currency: Currency) -> Self {
        Self {
            month: summary.month,
            label: summary.month.label(),
            total_income: amount(summary.total_income),
            total_expenses: amount(summary.total_expenses),
            net_result: amount(summary.net_result),
            entry_count: summary.entry_count,
            formatted_net_result: formatted(summary.net_result, currency),
        }
    }
}

/// A row of the monthly detail.
#[derive(Debug, Serialize)]
pub struct RecordView {
    /// Entry date.
    pub date: NaiveDate,
    /// Income.
    pub income: String,
    /// Expenses.
    pub expenses: String,
    /// Income minus expenses.
    pub daily_result: String,
    /// Carry-forward balance through this day.
    pub running_balance: String,
    /// Currency rendering of `running_balance`.
    pub formatted_running_balance: String,
}

impl RecordView {
    fn new(record: &DerivedDailyRecord, currency: Currency) -> Self {
        Self {
            date: record.date,
            income: amount(record.income),
            expenses: amount(record.expenses),
            daily_result: amount(record.daily_result),
            running_balance: amount(record.running_balance),
            formatted_running_balance: formatted(record.running_balance, currency),
        }
    }
}

/// Monthly totals.
#[derive(Debug, Serialize)]
pub struct TotalsView {
    /// Sum of income.
    pub total_income: String,
    /// Sum of expenses.
    pub total_expenses: String,
    /// Income minus expenses.
    pub net_result: String,
    /// Balance after the last day.
    pub final_balance: String,
    /// Currency rendering of `final_balance`.
    pub formatted_final_balance: String,
}

/// Monthly detail with running balances.
#[derive(Debug, Serialize)]
pub struct MonthlyReportView {
    /// `YYYY-MM`.
    pub month: MonthKey,
    /// e.g. `January 2024`.
    pub label: String,
    /// Balance the month opens with.
    pub opening_balance: String,
    /// Daily rows, oldest first.
    pub records: Vec<RecordView>,
    /// Month totals.
    pub totals: TotalsView,
}

impl MonthlyReportView {
    /// Builds the view of `report`.
    #[must_use]
    pub fn new(report: &MonthlyReport, currency: Currency) -> Self {
        Self {
            month: report.month,
            label: report.month.label(),
            opening_balance: amount(report.opening_balance),
            records: report
                .records
                .iter()
                .map(|record| RecordView::new(record, currency))
                .collect(),
            totals: TotalsView {
                total_income: amount(report.totals.total_income),
                total_expenses: amount(report.totals.total_expenses),
                net_result: amount(report.totals.net_result),
                final_balance: amount(report.totals.final_balance),
                formatted_final_balance: formatted(report.totals.final_balance, currency),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(80), "80.00")]
    #[case(dec!(-10.5), "-10.50")]
    #[case(dec!(0.005), "0.01")]
    #[case(dec!(1234.5678), "1234.57")]
    fn test_amount(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(amount(value), expected);
    }
}
