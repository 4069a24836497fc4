use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionResponse, User};
use crate::schema::collections;
use crate::services::{authorization::ensure_owner, collection_service};
use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/collections/{id}/insights/{insight_id}",
    params(
        ("id" = Uuid, Path, description = "Collection id"),
        ("insight_id" = Uuid, Path, description = "Insight id to remove")
    ),
    responses(
        (status = 200, description = "Membership updated (no-op if not a member)", body = CollectionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn remove_collection_insight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path((id, insight_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let collection = collection_service::find(conn, id)?;
    ensure_owner(&collection, user.id)?;

    // Removal is idempotent: writing an unchanged list is a harmless no-op.
    let insight_ids = collection_service::remove_member(collection.insight_ids, insight_id);

    let updated: Collection = diesel::update(collections::table.find(id))
        .set((
            collections::insight_ids.eq(insight_ids),
            collections::updated_at.eq(Utc::now()),
        ))
        .returning(Collection::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!(
        "Insight {} removed from collection {} by user {}",
        insight_id, id, user.id
    );

    Ok(Json(collection_service::populate(conn, updated)?))
}
