use crate::error::ApiError;
use crate::models::models::{AppState, ProfileResponse, UpdateProfileRequest, User, UserChanges};
use crate::schema::users;
use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/auth/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    // An empty display name is treated as "not provided", like the other
    // omitted fields.
    let changes = UserChanges {
        display_name: payload
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()),
        bio: payload.bio,
        avatar: payload.avatar,
    };

    if changes.display_name.is_none() && changes.bio.is_none() && changes.avatar.is_none() {
        return Ok(Json(ProfileResponse { user: user.into() }));
    }

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let updated: User = diesel::update(users::table.find(user.id))
        .set((&changes, users::updated_at.eq(Utc::now())))
        .returning(User::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!("Profile updated for user {}", updated.id);

    Ok(Json(ProfileResponse {
        user: updated.into(),
    }))
}
