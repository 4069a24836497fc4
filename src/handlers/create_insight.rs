use crate::error::ApiError;
use crate::models::models::{
    AppState, Insight, InsightRequest, InsightResponse, NewInsight, User, VISIBILITY_PUBLIC,
};
use crate::schema::insights;
use crate::utility::normalize_tags;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/insights",
    request_body = InsightRequest,
    responses(
        (status = 201, description = "Insight created", body = InsightResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Insights"
)]
pub async fn create_insight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(payload): Json<InsightRequest>,
) -> Result<(StatusCode, Json<InsightResponse>), ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let insight: Insight = diesel::insert_into(insights::table)
        .values(NewInsight {
            user_id: user.id,
            title: payload.title,
            source: payload.source.filter(|s| !s.trim().is_empty()),
            takeaway: payload.takeaway,
            tags: normalize_tags(payload.tags),
            visibility: payload
                .visibility
                .unwrap_or_else(|| VISIBILITY_PUBLIC.to_string()),
        })
        .returning(Insight::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!("Insight {} created by user {}", insight.id, user.id);

    Ok((
        StatusCode::CREATED,
        Json(InsightResponse::from_row((
            insight,
            (user.id, user.username, user.display_name),
        ))),
    ))
}
