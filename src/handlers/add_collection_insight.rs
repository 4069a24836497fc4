use crate::error::ApiError;
use crate::models::models::{AddInsightRequest, AppState, Collection, CollectionResponse, User};
use crate::schema::collections;
use crate::services::{authorization::ensure_owner, collection_service, insight_service};
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
    post,
    path = "/api/collections/{id}/insights",
    params(("id" = Uuid, Path, description = "Collection id")),
    request_body = AddInsightRequest,
    responses(
        (status = 200, description = "Membership updated (no-op if already a member)", body = CollectionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection or insight not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn add_collection_insight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddInsightRequest>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let collection = collection_service::find(conn, id)?;
    ensure_owner(&collection, user.id)?;

    // The member must exist, but may belong to any user.
    insight_service::find(conn, payload.insight_id)?;

    let membership = collection_service::add_member(&collection.insight_ids, payload.insight_id);
    let collection = if let Some(insight_ids) = membership {
        let updated: Collection = diesel::update(collections::table.find(id))
            .set((
                collections::insight_ids.eq(insight_ids),
                collections::updated_at.eq(Utc::now()),
            ))
            .returning(Collection::as_returning())
            .get_result(conn)
            .map_err(ApiError::Database)?;

        info!(
            "Insight {} added to collection {} by user {}",
            payload.insight_id, id, user.id
        );
        updated
    } else {
        collection
    };

    Ok(Json(collection_service::populate(conn, collection)?))
}
