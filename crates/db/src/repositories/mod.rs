//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod daily_entry;
pub mod user;

pub use daily_entry::DailyEntryRepository;
pub use user::UserRepository;
