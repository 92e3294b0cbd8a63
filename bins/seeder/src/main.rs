//! Database seeder for development.
//!
//! Creates a demo owner account and about two months of daily entries,
//! submitted through the same flow the API uses so balances chain up.
//!
//! Usage: cargo run --bin seeder

use chrono::{Days, Utc};
use chrono_tz::Tz;
use laundry_core::auth::hash_password;
use laundry_core::submission::{DailyReportForm, SubmissionService};
use laundry_db::{DailyEntryRepository, UserRepository};
use laundry_shared::ReportConfig;
use laundry_shared::types::UserId;

const DEMO_EMAIL: &str = "owner@laundry.dev";
const DEMO_PASSWORD: &str = "laundry-demo";
const DEMO_DAYS: u64 = 60;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = laundry_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let users = UserRepository::new(db.clone());
    if users
        .email_exists(DEMO_EMAIL)
        .await
        .expect("Failed to check demo user")
    {
        println!("  Demo user already exists, skipping...");
        return;
    }

    println!("Seeding demo user...");
    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash password");
    let user = users
        .create(DEMO_EMAIL, &password_hash, "Demo Owner")
        .await
        .expect("Failed to create demo user");
    let user_id = UserId::from_uuid(user.id);

    println!("Seeding daily entries...");
    let store = DailyEntryRepository::new(db);
    let report = ReportConfig::load().expect("Failed to load report configuration");
    let timezone: Tz = report
        .timezone
        .parse()
        .expect("report.timezone must be an IANA timezone");
    let today = Utc::now().with_timezone(&timezone).date_naive();
    for offset in (1..=DEMO_DAYS).rev() {
        let date = today
            .checked_sub_days(Days::new(offset))
            .expect("date within range");
        let (income, expenses) = demo_amounts(offset);
        let mut form = DailyReportForm::filled(Some(date), income, expenses, None);

        SubmissionService::submit(&store, &mut form, Some(user_id), today)
            .await
            .expect("Failed to submit demo entry");
    }

    println!("Seeding complete! Sign in as {DEMO_EMAIL} / {DEMO_PASSWORD}");
}

/// Deterministic income/expense pair for a day.
fn demo_amounts(offset: u64) -> (String, String) {
    let base = 350_000 + (offset % 7) * 45_000;
    let expenses = 120_000 + (offset % 5) * 30_000;
    (format!("{base}.00"), format!("{expenses}.00"))
}
