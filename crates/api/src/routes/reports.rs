//! Monthly report routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::get,
};
use laundry_core::export::{export_file_name, monthly_report_table};
use laundry_core::period::MonthKey;
use laundry_core::reports::ReportService;
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::error::into_response;
use crate::middleware::auth::AuthUser;
use crate::views::{MonthlyReportView, SummaryView};

/// Creates the reports router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/monthly", get(monthly_summaries))
        .route("/reports/monthly/{month}", get(monthly_report))
        .route("/reports/monthly/{month}/pdf", get(monthly_report_pdf))
}

/// GET /reports/monthly - Monthly summaries, most recent first.
async fn monthly_summaries(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    match ReportService::monthly_summaries(&*state.entries, user.user_id()).await {
        Ok(summaries) => {
            let views: Vec<SummaryView> = summaries
                .iter()
                .map(|summary| SummaryView::new(summary, state.currency))
                .collect();
            (StatusCode::OK, Json(json!({ "months": views }))).into_response()
        }
        Err(e) => into_response(e),
    }
}

/// GET /reports/monthly/{month} - Daily detail with running balances.
async fn monthly_report(
    State(state): State<AppState>,
    user: AuthUser,
    Path(month): Path<String>,
) -> impl IntoResponse {
    let month: MonthKey = match month.parse() {
        Ok(m) => m,
        Err(e) => return into_response(e),
    };

    match ReportService::monthly_report(&*state.entries, user.user_id(), month).await {
        Ok(report) => (
            StatusCode::OK,
            Json(MonthlyReportView::new(&report, state.currency)),
        )
            .into_response(),
        Err(e) => into_response(e),
    }
}

/// GET /reports/monthly/{month}/pdf - Monthly detail as a PDF download.
async fn monthly_report_pdf(
    State(state): State<AppState>,
    user: AuthUser,
    Path(month): Path<String>,
) -> impl IntoResponse {
    let month: MonthKey = match month.parse() {
        Ok(m) => m,
        Err(e) => return into_response(e),
    };

    let report = match ReportService::monthly_report(&*state.entries, user.user_id(), month).await
    {
        Ok(r) => r,
        Err(e) => return into_response(e),
    };

    let table = monthly_report_table(&report, state.currency);
    match state.exporter.render(&table) {
        Ok(bytes) => {
            info!(user_id = %user.user_id(), month = %month, bytes = bytes.len(), "Monthly report exported");
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, state.exporter.content_type().to_string()),
                    (
                        CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", export_file_name(month)),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => into_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{authed, send, send_raw, test_app, test_state, token_for};
    use axum::body::Body;
    use chrono::NaiveDate;
    use laundry_core::entry::NewDailyEntry;
    use laundry_core::store::{EntryStore, MemoryEntryStore};
    use laundry_shared::types::UserId;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded_state(user: UserId) -> crate::AppState {
        let store = MemoryEntryStore::new();
        for entry in [
            NewDailyEntry::new(user, date(2024, 1, 1), dec!(100), dec!(20), dec!(0)).unwrap(),
            NewDailyEntry::new(user, date(2024, 1, 2), dec!(50), dec!(10), dec!(80)).unwrap(),
            NewDailyEntry::new(user, date(2024, 2, 1), dec!(5), dec!(15), dec!(120)).unwrap(),
        ] {
            store.insert(entry).await.unwrap();
        }
        let mut state = test_state();
        state.entries = Arc::new(store);
        state
    }

    #[tokio::test]
    async fn test_requires_token() {
        let request = axum::http::Request::builder()
            .uri("/api/v1/reports/monthly")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(test_app(test_state()), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_monthly_summaries() {
        let user = UserId::new();
        let state = seeded_state(user).await;
        let token = token_for(&state, user);

        let (status, json) = send(
            test_app(state),
            authed("GET", "/api/v1/reports/monthly", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let months = json["months"].as_array().unwrap();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0]["month"], "2024-02");
        assert_eq!(months[0]["net_result"], "-10.00");
        assert_eq!(months[1]["month"], "2024-01");
        assert_eq!(months[1]["net_result"], "120.00");
        assert_eq!(months[1]["label"], "January 2024");
    }

    #[tokio::test]
    async fn test_monthly_detail() {
        let user = UserId::new();
        let state = seeded_state(user).await;
        let token = token_for(&state, user);

        let (status, json) = send(
            test_app(state),
            authed("GET", "/api/v1/reports/monthly/2024-01", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["opening_balance"], "0.00");
        assert_eq!(json["records"][0]["running_balance"], "80.00");
        assert_eq!(json["records"][1]["running_balance"], "120.00");
        assert_eq!(json["totals"]["final_balance"], "120.00");
    }

    #[tokio::test]
    async fn test_other_users_see_nothing() {
        let owner = UserId::new();
        let state = seeded_state(owner).await;
        let token = token_for(&state, UserId::new());

        let (status, json) = send(
            test_app(state),
            authed("GET", "/api/v1/reports/monthly/2024-01", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["records"].as_array().unwrap().is_empty());
        assert_eq!(json["totals"]["final_balance"], "0.00");
    }

    #[tokio::test]
    async fn test_invalid_month_is_bad_request() {
        let state = test_state();
        let token = token_for(&state, UserId::new());

        let (status, json) = send(
            test_app(state),
            authed("GET", "/api/v1/reports/monthly/2024-13", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_pdf_export() {
        let user = UserId::new();
        let state = seeded_state(user).await;
        let token = token_for(&state, user);

        let (status, headers, body) = send_raw(
            test_app(state),
            authed("GET", "/api/v1/reports/monthly/2024-01/pdf", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[CONTENT_TYPE], "application/pdf");
        assert_eq!(
            headers[CONTENT_DISPOSITION],
            "attachment; filename=\"monthly-report-2024-01.pdf\""
        );
        assert!(body.starts_with(b"%PDF"));
    }
}
