//! Laundry reporting API server.

use std::sync::Arc;

use anyhow::Context;
use chrono_tz::Tz;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laundry_api::{AppState, create_router};
use laundry_core::export::PdfExporter;
use laundry_db::{DailyEntryRepository, connect_with_pool};
use laundry_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "laundry=debug,laundry_api=debug,laundry_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let timezone: Tz = config
        .report
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid report timezone: {e}"))?;

    let db = connect_with_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .context("failed to connect to database")?;
    info!("Connected to database");

    let jwt_config = JwtConfig {
        secret: config.jwt.secret.clone(),
        access_token_expires_minutes: i64::try_from(config.jwt.access_token_expiry_secs / 60)
            .unwrap_or(i64::MAX),
    };

    let state = AppState {
        entries: Arc::new(DailyEntryRepository::new(db.clone())),
        db: Arc::new(db),
        jwt_service: Arc::new(JwtService::new(jwt_config)),
        exporter: Arc::new(PdfExporter::new()),
        currency: config.report.currency,
        timezone,
    };
    info!(
        currency = %config.report.currency,
        timezone = %timezone,
        "Report settings loaded"
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
