//! Daily entry submission flow.
//!
//! A [`DailyReportForm`] holds raw user input and moves through
//! `Idle -> Submitting -> Succeeded | Failed`. [`SubmissionService`] drives
//! one submission against an [`EntryStore`](crate::store::EntryStore).

mod error;
mod form;
mod service;

pub use error::SubmissionError;
pub use form::{AmountField, DailyReportForm, SubmissionState, ValidatedSubmission};
pub use service::SubmissionService;
