//! Database migration runner.
//!
//! Usage:
//!   migrator up      - Apply pending migrations (users, daily_entries)
//!   migrator down    - Roll back the last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-apply

use laundry_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // sea-orm-migration's CLI reads DATABASE_URL and sets up its own tracing.
    cli::run_cli(Migrator).await;
}
