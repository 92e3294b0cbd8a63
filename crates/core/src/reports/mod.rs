//! Report views over a user's daily entries.
//!
//! - Monthly detail with carry-forward running balances
//! - Monthly summaries (roll-up), newest month first
//! - Previous entries list

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
