use crate::config::security_config::create_token;
use crate::error::ApiError;
use crate::models::models::{AppState, AuthResponse, LoginRequest, User};
use crate::schema::users;
use axum::{extract::State, Json};
use bcrypt::verify;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

// Verified on a miss so unknown emails cost the same as wrong passwords.
const DUMMY_HASH: &str = "$2b$12$K8c0Mmu3bzh6kkm1wF5uPeXmRH4P0WmJv7yFQJ9vTt0cF0eSxVt9y";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid input or invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let email = payload.email.trim().to_lowercase();

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let user: Option<User> = users::table
        .filter(users::email.eq(&email))
        .select(User::as_select())
        .first(conn)
        .optional()
        .map_err(|e| {
            error!("Database error finding user {}: {}", email, e);
            ApiError::Database(e)
        })?;

    let user = match user {
        Some(user) => user,
        None => {
            let _ = verify(&payload.password, DUMMY_HASH);
            warn!("Login attempt for unknown email: {}", email);
            return Err(ApiError::Credentials("Invalid credentials".to_string()));
        }
    };

    if !verify(&payload.password, &user.password_hash).map_err(|e| {
        error!("Password verification error for user {}: {}", user.id, e);
        ApiError::Bcrypt(e)
    })? {
        warn!("Invalid password for user: {}", user.id);
        return Err(ApiError::Credentials("Invalid credentials".to_string()));
    }

    let token = create_token(&state, &user.id.to_string())?;

    info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
