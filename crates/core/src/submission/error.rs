//! Submission error types.

use chrono::NaiveDate;
use laundry_shared::AppError;
use thiserror::Error;

use super::form::AmountField;
use crate::store::StoreError;

/// Errors that can occur while submitting a daily entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// No authenticated user.
    #[error("You must be signed in to submit a report")]
    MissingIdentity,

    /// No date selected.
    #[error("Please select a date")]
    MissingDate,

    /// Date is after today.
    #[error("Date {date} is in the future (today is {today})")]
    FutureDate {
        /// Selected date.
        date: NaiveDate,
        /// Business-local today.
        today: NaiveDate,
    },

    /// Amount is blank or not a number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidAmount {
        /// Offending field.
        field: AmountField,
        /// Raw input.
        value: String,
    },

    /// Amount has more integer digits than can be stored.
    #[error("{field} is too large")]
    AmountTooLarge {
        /// Offending field.
        field: AmountField,
    },

    /// The resulting balance has more integer digits than can be stored.
    #[error("Resulting balance is out of range")]
    BalanceOutOfRange,

    /// Amount is below zero.
    #[error("{field} cannot be negative")]
    NegativeAmount {
        /// Offending field.
        field: AmountField,
    },

    /// A submission from this form is already in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// The store rejected the lookup or the insert.
    #[error("Failed to save report: {0}")]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Returns true for errors caused by user input rather than storage.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Store(_) | Self::AlreadySubmitting)
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match &err {
            SubmissionError::MissingIdentity => Self::Unauthorized(err.to_string()),
            SubmissionError::AlreadySubmitting => Self::Conflict(err.to_string()),
            SubmissionError::Store(store) => store.clone().into(),
            _ => Self::Validation(err.to_string()),
        }
    }
}
