//! Initial database migration.
//!
//! Creates the users and daily_entries tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(DAILY_ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    full_name VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_users_email ON users(email) WHERE is_active = true;
";

// Entries are append-only. Same-day duplicates are allowed.
const DAILY_ENTRIES_SQL: &str = r"
CREATE TABLE daily_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    entry_date DATE NOT NULL,
    income NUMERIC(19, 4) NOT NULL,
    expenses NUMERIC(19, 4) NOT NULL,
    previous_balance NUMERIC(19, 4) NOT NULL,
    result NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_income_non_negative CHECK (income >= 0),
    CONSTRAINT chk_expenses_non_negative CHECK (expenses >= 0),
    CONSTRAINT chk_result_snapshot CHECK (result = previous_balance + income - expenses)
);

-- Per-user date scans for reports and the previous-balance lookup
CREATE INDEX idx_daily_entries_user_date ON daily_entries(user_id, entry_date, created_at);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS daily_entries CASCADE;
DROP TABLE IF EXISTS users CASCADE;
";
