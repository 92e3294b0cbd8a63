//! Router test helpers backed by the in-memory entry store.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION, request::Builder};
use http_body_util::BodyExt;
use laundry_core::export::PdfExporter;
use laundry_core::store::MemoryEntryStore;
use laundry_shared::types::{Currency, UserId};
use laundry_shared::{JwtConfig, JwtService};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::{AppState, create_router};

pub fn test_state() -> AppState {
    AppState {
        db: Arc::new(DatabaseConnection::Disconnected),
        entries: Arc::new(MemoryEntryStore::new()),
        jwt_service: Arc::new(JwtService::new(JwtConfig::default())),
        exporter: Arc::new(PdfExporter::new()),
        currency: Currency::Idr,
        timezone: chrono_tz::Asia::Jakarta,
    }
}

pub fn test_app(state: AppState) -> Router {
    create_router(state)
}

pub fn token_for(state: &AppState, user: UserId) -> String {
    state
        .jwt_service
        .generate_access_token(user.into_inner())
        .expect("should generate token")
}

pub fn authed(method: &str, uri: &str, token: &str) -> Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header("Content-Type", "application/json")
}

pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, headers, body)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = send_raw(app, request).await;
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
