use crate::error::ApiError;
use crate::models::models::{AppState, User};
use axum::http::Request;
use axum::middleware::Next;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
}

pub struct JWTSecret {
    pub jwt_secret: String,
}

impl JWTSecret {
    pub fn new() -> Self {
        let jwt_secret =
            env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment variables");

        if jwt_secret.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long");
        }

        Self { jwt_secret }
    }
}

pub fn create_token(state: &AppState, user_id: &str) -> Result<String, ApiError> {
    let secret = state.jwt_secret.as_bytes();

    let now = Utc::now();
    // Sessions last 7 days unless overridden
    let expiration_hours: i64 = env::var("JWT_EXPIRATION_HOURS")
        .unwrap_or_else(|_| "168".to_string())
        .parse()
        .map_err(|e| {
            error!("JWT expiration config error: {}", e);
            ApiError::Token(format!("Invalid JWT expiration configuration: {}", e))
        })?;

    let exp = (now + Duration::hours(expiration_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| {
        error!("JWT encoding error: {}", e);
        ApiError::Token(format!("Token creation failed: {}", e))
    })
}

pub fn verify_token(state: &AppState, token: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT verification error: {}", e))
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<Result<String, ApiError>> {
    let auth_header = match headers.get("Authorization") {
        Some(value) => value,
        None => return None,
    };

    let auth_header = match auth_header.to_str() {
        Ok(value) => value,
        Err(_) => {
            return Some(Err(ApiError::Auth(
                "Invalid Authorization format".to_string(),
            )))
        }
    };

    let token = match auth_header.strip_prefix("Bearer ") {
        Some(token) => token.trim(),
        None => {
            return Some(Err(ApiError::Auth(
                "Invalid Authorization format".to_string(),
            )))
        }
    };

    if token.is_empty() {
        return Some(Err(ApiError::Auth(
            "Invalid Authorization format".to_string(),
        )));
    }

    Some(Ok(token.to_string()))
}

/// Verifies the token and loads the referenced user. Inactive or deleted
/// accounts are rejected the same way as a bad token.
fn authenticate(state: &AppState, token: &str) -> Result<User, ApiError> {
    let claims = verify_token(state, token).map_err(|e| {
        warn!(
            "JWT verification failed for token ending in ...{}: {}",
            token.chars().rev().take(8).collect::<String>(),
            e
        );
        ApiError::Auth("Invalid or expired token".to_string())
    })?;

    let now = Utc::now().timestamp() as usize;
    if claims.exp < now {
        warn!("Token expired for user {}", claims.sub);
        return Err(ApiError::Auth("Token expired".to_string()));
    }

    let user_id = uuid::Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::Auth("Invalid user ID in token".to_string()))?;

    let mut conn = state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let user: Option<User> = crate::schema::users::table
        .find(user_id)
        .select(User::as_select())
        .first(&mut conn)
        .optional()
        .map_err(ApiError::Database)?;

    match user {
        Some(user) if user.is_active => Ok(user),
        Some(user) => {
            warn!("Inactive user {} attempted access", user.id);
            Err(ApiError::Auth("Account is deactivated".to_string()))
        }
        None => Err(ApiError::Auth("User no longer exists".to_string())),
    }
}

/// Rejects requests without a valid bearer token and attaches the
/// authenticated user to the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(req.headers()) {
        Some(Ok(token)) => token,
        Some(Err(err)) => return Err(err.into_response()),
        None => {
            return Err(
                ApiError::Auth("Authorization header required".to_string()).into_response(),
            )
        }
    };

    let user = authenticate(&state, &token).map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Like [`auth_middleware`], but a missing token is not an error: the
/// request simply proceeds anonymously. A token that is present but
/// invalid is still rejected. Handlers behind this layer extract
/// `Extension<Option<User>>`.
pub async fn optional_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let viewer = match extract_bearer_token(req.headers()) {
        Some(Ok(token)) => {
            Some(authenticate(&state, &token).map_err(IntoResponse::into_response)?)
        }
        Some(Err(err)) => return Err(err.into_response()),
        None => None,
    };

    req.extensions_mut().insert(viewer);
    Ok(next.run(req).await)
}
