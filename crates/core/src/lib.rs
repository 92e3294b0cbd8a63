//! Core business logic for laundry reporting.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `entry` - Daily income/expense entries
//! - `balance` - Carry-forward running balances
//! - `period` - Calendar month keys and ranges
//! - `rollup` - Monthly roll-up of daily entries
//! - `store` - Entry Store port and in-memory adapter
//! - `submission` - Daily entry submission flow
//! - `reports` - Report assembly on top of the store
//! - `export` - Tabular report export (PDF)
//! - `auth` - Password hashing

pub mod auth;
pub mod balance;
pub mod entry;
pub mod export;
pub mod period;
pub mod reports;
pub mod rollup;
pub mod store;
pub mod submission;
