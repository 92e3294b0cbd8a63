//! Daily entry routes: submission, previous entries and the prefill lookup.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use laundry_core::reports::ReportService;
use laundry_core::submission::{DailyReportForm, SubmissionService};
use laundry_shared::types::Money;
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::error::into_response;
use crate::middleware::auth::AuthUser;
use crate::views::{EntryView, amount};

/// Creates the entries router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).post(submit_entry))
        .route("/entries/previous-balance", get(previous_balance))
}

/// Query parameters for the previous entries list.
#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    /// Maximum number of entries to return.
    pub limit: Option<u64>,
}

/// An amount sent either as a JSON string or a JSON number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// `"100.50"`
    Text(String),
    /// `100.50`
    Number(serde_json::Number),
}

impl AmountInput {
    fn into_raw(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Daily entry submission payload.
///
/// Missing amounts are passed on blank so the form reports them.
#[derive(Debug, Deserialize)]
pub struct SubmitEntryRequest {
    /// Entry date; required.
    pub date: Option<NaiveDate>,
    /// Income for the day.
    #[serde(default)]
    pub income: Option<AmountInput>,
    /// Expenses for the day.
    #[serde(default)]
    pub expenses: Option<AmountInput>,
    /// Overrides the looked-up previous balance.
    #[serde(default)]
    pub previous_balance: Option<AmountInput>,
}

/// GET /entries - The user's entries, newest first.
async fn list_entries(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListEntriesQuery>,
) -> impl IntoResponse {
    match ReportService::previous_entries(&*state.entries, user.user_id(), query.limit).await {
        Ok(entries) => {
            let views: Vec<EntryView> = entries
                .iter()
                .map(|entry| EntryView::new(entry, state.currency))
                .collect();
            (StatusCode::OK, Json(json!({ "entries": views }))).into_response()
        }
        Err(e) => into_response(e),
    }
}

/// POST /entries - Submit a daily entry.
async fn submit_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SubmitEntryRequest>,
) -> impl IntoResponse {
    let mut form = DailyReportForm::filled(
        payload.date,
        payload.income.map(AmountInput::into_raw).unwrap_or_default(),
        payload.expenses.map(AmountInput::into_raw).unwrap_or_default(),
        payload.previous_balance.map(AmountInput::into_raw),
    );

    match SubmissionService::submit(&*state.entries, &mut form, Some(user.user_id()), state.today())
        .await
    {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(json!({
                "entry": EntryView::new(&entry, state.currency),
                "message": "Report submitted successfully"
            })),
        )
            .into_response(),
        Err(e) => into_response(e),
    }
}

/// GET /entries/previous-balance - Prefill values for the submission form.
async fn previous_balance(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    match SubmissionService::previous_balance(&*state.entries, user.user_id()).await {
        Ok(balance) => {
            let form = DailyReportForm::new(state.today());
            (
                StatusCode::OK,
                Json(json!({
                    "previous_balance": amount(balance),
                    "formatted": Money::new(balance, state.currency).to_string(),
                    "default_date": form.date,
                })),
            )
                .into_response()
        }
        Err(e) => into_response(e),
    }
}
