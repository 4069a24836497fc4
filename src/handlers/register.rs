use crate::config::security_config::create_token;
use crate::error::ApiError;
use crate::models::models::{AppState, AuthResponse, NewUser, RegisterRequest, User};
use crate::schema::users;
use axum::{extract::State, http::StatusCode, Json};
use bcrypt::{hash, DEFAULT_COST};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Invalid input or username/email already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Registration validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_lowercase();

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let taken: i64 = users::table
        .filter(users::email.eq(&email).or(users::username.eq(&username)))
        .count()
        .get_result(conn)
        .map_err(ApiError::Database)?;

    if taken > 0 {
        return Err(ApiError::Duplicate(
            "User with this email or username already exists".to_string(),
        ));
    }

    let hashed = hash(&payload.password, DEFAULT_COST).map_err(ApiError::Bcrypt)?;

    let display_name = payload
        .display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| username.clone());

    // The uniqueness check above races with concurrent registrations; the
    // unique constraints are the source of truth.
    let user: User = diesel::insert_into(users::table)
        .values(NewUser {
            username,
            email,
            password_hash: hashed,
            display_name,
        })
        .returning(User::as_returning())
        .get_result(conn)
        .map_err(|e| match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::Duplicate(
                    "User with this email or username already exists".to_string(),
                )
            }
            e => ApiError::Database(e),
        })?;

    let token = create_token(&state, &user.id.to_string())?;

    info!("User registered: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
