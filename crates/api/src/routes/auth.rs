//! Authentication routes for registration and login.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use laundry_core::auth::{hash_password, normalize_email, validate_registration, verify_password};
use laundry_db::UserRepository;
use laundry_shared::AppError;
use laundry_shared::auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::error::{error_response, into_response};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

fn invalid_credentials() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "invalid_credentials",
            "message": "Invalid email or password"
        })),
    )
        .into_response()
}

/// POST /auth/login - Authenticate user and return an access token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());
    let email = normalize_email(&payload.email);

    let user = match user_repo.find_by_email(&email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %email, "Login attempt for non-existent user");
            return invalid_credentials();
        }
        Err(e) => return error_response(&AppError::Database(e.to_string())),
    };

    if !user.is_active {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "account_disabled",
                "message": "This account has been disabled"
            })),
        )
            .into_response();
    }

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return invalid_credentials();
        }
        Err(e) => return error_response(&AppError::Internal(e.to_string())),
    }

    let access_token = match state.jwt_service.generate_access_token(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate access token");
            return error_response(&AppError::Internal(e.to_string()));
        }
    };

    info!(user_id = %user.id, "User logged in successfully");

    let response = LoginResponse {
        user: UserInfo {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
        },
        access_token,
        expires_in: state.jwt_service.access_token_expires_in(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// POST /auth/register - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let email = normalize_email(&payload.email);
    let full_name = payload.full_name.trim();
    if let Err(e) = validate_registration(&email, &payload.password, full_name) {
        return into_response(e);
    }

    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.email_exists(&email).await {
        Ok(true) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "email_exists",
                    "message": "An account with this email already exists"
                })),
            )
                .into_response();
        }
        Ok(false) => {}
        Err(e) => return error_response(&AppError::Database(e.to_string())),
    }

    let password_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => return error_response(&AppError::Internal(e.to_string())),
    };

    let user = match user_repo.create(&email, &password_hash, full_name).await {
        Ok(u) => u,
        Err(e) => return error_response(&AppError::Database(e.to_string())),
    };

    info!(user_id = %user.id, email = %user.email, "New user registered");

    (
        StatusCode::CREATED,
        Json(json!({
            "user": UserInfo {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
            },
            "message": "Registration successful. Please sign in."
        })),
    )
        .into_response()
}
