use crate::models::models::{ProfileResponse, User};
use axum::{extract::Extension, Json};

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn current_user(Extension(user): Extension<User>) -> Json<ProfileResponse> {
    Json(ProfileResponse { user: user.into() })
}
