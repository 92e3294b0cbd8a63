//! Report assembly.

use laundry_shared::types::UserId;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{MonthlyReport, MonthlyTotals};
use crate::balance::{carry_forward, final_balance, resolve_period_seed};
use crate::entry::DailyEntry;
use crate::period::MonthKey;
use crate::rollup::{MonthlySummary, roll_up, sorted_most_recent_first};
use crate::store::{EntryStore, SortDirection, StoreError};

/// Builds report views from stored entries.
///
/// Every view re-fetches its entries and recomputes from scratch.
pub struct ReportService;

impl ReportService {
    /// Builds the monthly detail for `month` from `entries`.
    ///
    /// Entries outside the month are ignored. The opening balance is the
    /// `previous_balance` snapshot of the earliest entry in the month, or
    /// zero when the month is empty.
    #[must_use]
    pub fn build_monthly_report(month: MonthKey, entries: &[DailyEntry]) -> MonthlyReport {
        let mut in_month: Vec<DailyEntry> = entries
            .iter()
            .filter(|entry| month.contains(entry.date))
            .cloned()
            .collect();
        in_month.sort_by_key(|entry| entry.date);

        let opening_balance = resolve_period_seed(in_month.first());
        let records = carry_forward(&in_month, opening_balance);

        let total_income: Decimal = records.iter().map(|r| r.income).sum();
        let total_expenses: Decimal = records.iter().map(|r| r.expenses).sum();

        MonthlyReport {
            month,
            opening_balance,
            totals: MonthlyTotals {
                total_income,
                total_expenses,
                net_result: total_income - total_expenses,
                final_balance: final_balance(&records),
            },
            records,
        }
    }

    /// Fetches and builds the monthly detail for `user_id`.
    pub async fn monthly_report<S: EntryStore + ?Sized>(
        store: &S,
        user_id: UserId,
        month: MonthKey,
    ) -> Result<MonthlyReport, StoreError> {
        let entries = store
            .query_by_user_in_range(user_id, month.first_day(), month.last_day())
            .await?;
        debug!(user_id = %user_id, month = %month, entries = entries.len(), "Building monthly report");

        Ok(Self::build_monthly_report(month, &entries))
    }

    /// Monthly summaries for `user_id`, most recent month first.
    pub async fn monthly_summaries<S: EntryStore + ?Sized>(
        store: &S,
        user_id: UserId,
    ) -> Result<Vec<MonthlySummary>, StoreError> {
        let entries = store
            .query_by_user(user_id, SortDirection::Descending, None)
            .await?;
        debug!(user_id = %user_id, entries = entries.len(), "Rolling up monthly summaries");

        Ok(sorted_most_recent_first(roll_up(&entries)))
    }

    /// The user's entries, newest first, optionally truncated.
    pub async fn previous_entries<S: EntryStore + ?Sized>(
        store: &S,
        user_id: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<DailyEntry>, StoreError> {
        store
            .query_by_user(user_id, SortDirection::Descending, limit)
            .await
    }
}
