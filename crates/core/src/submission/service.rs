//! Submission orchestration.

use chrono::NaiveDate;
use laundry_shared::types::UserId;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::error::SubmissionError;
use super::form::{DailyReportForm, ValidatedSubmission};
use crate::balance::resolve_submission_seed;
use crate::entry::{DailyEntry, NewDailyEntry};
use crate::store::{EntryStore, SortDirection, StoreError};

/// Drives a [`DailyReportForm`] through one submission.
pub struct SubmissionService;

impl SubmissionService {
    /// Validates the form, resolves the previous balance and stores the entry.
    ///
    /// Validation errors leave the form untouched and never reach the store.
    /// A store error moves the form to `Failed` with its inputs intact. A
    /// resulting balance that cannot be stored is rejected before the insert.
    pub async fn submit<S: EntryStore + ?Sized>(
        store: &S,
        form: &mut DailyReportForm,
        user: Option<UserId>,
        today: NaiveDate,
    ) -> Result<DailyEntry, SubmissionError> {
        let submission = form.begin(user, today)?;
        let user_id = submission.user_id;

        match Self::persist(store, submission).await {
            Ok(entry) => {
                info!(
                    user_id = %user_id,
                    entry_id = %entry.id,
                    date = %entry.date,
                    result = %entry.result,
                    "Daily entry submitted"
                );
                form.succeed(entry.clone());
                Ok(entry)
            }
            Err(e) if e.is_validation() => {
                warn!(user_id = %user_id, error = %e, "Daily entry rejected");
                form.reject();
                Err(e)
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Daily entry submission failed");
                form.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// The balance a new entry for `user_id` would start from.
    ///
    /// This is the `result` of the user's latest entry by date, or zero.
    pub async fn previous_balance<S: EntryStore + ?Sized>(
        store: &S,
        user_id: UserId,
    ) -> Result<Decimal, StoreError> {
        let latest = store
            .query_by_user(user_id, SortDirection::Descending, Some(1))
            .await?;
        Ok(resolve_submission_seed(latest.first()))
    }

    async fn persist<S: EntryStore + ?Sized>(
        store: &S,
        submission: ValidatedSubmission,
    ) -> Result<DailyEntry, SubmissionError> {
        let stored_seed = Self::previous_balance(store, submission.user_id).await?;

        let previous_balance = match submission.previous_balance_override {
            Some(typed) if typed != stored_seed => {
                warn!(
                    user_id = %submission.user_id,
                    typed = %typed,
                    stored = %stored_seed,
                    "Previous balance overridden"
                );
                typed
            }
            Some(typed) => typed,
            None => stored_seed,
        };

        let entry = NewDailyEntry::new(
            submission.user_id,
            submission.date,
            submission.income,
            submission.expenses,
            previous_balance,
        )
        .ok_or(SubmissionError::BalanceOutOfRange)?;
        Ok(store.insert(entry).await?)
    }
}
