use crate::error::ApiError;
use crate::models::models::{AppState, Insight, InsightRequest, InsightResponse, User};
use crate::schema::insights;
use crate::services::{authorization::ensure_owner, insight_service};
use crate::utility::normalize_tags;
use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/insights/{id}",
    params(("id" = Uuid, Path, description = "Insight id")),
    request_body = InsightRequest,
    responses(
        (status = 200, description = "Insight updated", body = InsightResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Insight not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Insights"
)]
pub async fn update_insight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let insight = insight_service::find(conn, id)?;
    ensure_owner(&insight, user.id)?;

    let visibility = payload.visibility.unwrap_or(insight.visibility);

    let updated: Insight = diesel::update(insights::table.find(id))
        .set((
            insights::title.eq(payload.title),
            insights::source.eq(payload.source.filter(|s| !s.trim().is_empty())),
            insights::takeaway.eq(payload.takeaway),
            insights::tags.eq(normalize_tags(payload.tags)),
            insights::visibility.eq(visibility),
            insights::updated_at.eq(Utc::now()),
        ))
        .returning(Insight::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!("Insight {} updated by user {}", updated.id, user.id);

    Ok(Json(InsightResponse::from_row((
        updated,
        (user.id, user.username, user.display_name),
    ))))
}
