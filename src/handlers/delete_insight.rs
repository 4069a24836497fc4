use crate::error::ApiError;
use crate::models::models::{AppState, MessageResponse, User};
use crate::schema::insights;
use crate::services::{authorization::ensure_owner, insight_service};
use axum::{
    extract::{Extension, Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/insights/{id}",
    params(("id" = Uuid, Path, description = "Insight id")),
    responses(
        (status = 200, description = "Insight deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Insight not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Insights"
)]
pub async fn delete_insight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let insight = insight_service::find(conn, id)?;
    ensure_owner(&insight, user.id)?;

    // Collections referencing this insight keep the stale id; population
    // skips ids that no longer resolve.
    diesel::delete(insights::table.find(id))
        .execute(conn)
        .map_err(ApiError::Database)?;

    info!("Insight {} deleted by user {}", id, user.id);

    Ok(Json(MessageResponse {
        message: "Insight deleted successfully".to_string(),
    }))
}
