//! `SeaORM` entity definitions.

pub mod daily_entries;
pub mod users;
