//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - JSON views of reports and entries

pub mod error;
pub mod middleware;
pub mod routes;
pub mod views;

#[cfg(test)]
mod test_support;

use axum::Router;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use laundry_core::export::ReportExporter;
use laundry_core::store::EntryStore;
use laundry_shared::JwtService;
use laundry_shared::types::Currency;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (users).
    pub db: Arc<DatabaseConnection>,
    /// Daily entry storage.
    pub entries: Arc<dyn EntryStore>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Renders report downloads.
    pub exporter: Arc<dyn ReportExporter>,
    /// Currency used for formatted amounts.
    pub currency: Currency,
    /// Business timezone; defines "today".
    pub timezone: Tz,
}

impl AppState {
    /// Today's date in the business timezone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
