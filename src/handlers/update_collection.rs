use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionRequest, CollectionResponse, User};
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
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection id")),
    request_body = CollectionRequest,
    responses(
        (status = 200, description = "Collection updated", body = CollectionResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionRequest>,
) -> Result<Json<CollectionResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let collection = collection_service::find(conn, id)?;
    ensure_owner(&collection, user.id)?;

    let insight_ids = match payload.insights {
        Some(ids) => collection_service::filter_existing(conn, ids)?,
        None => collection.insight_ids,
    };

    let visibility = payload.visibility.unwrap_or(collection.visibility);

    let updated: Collection = diesel::update(collections::table.find(id))
        .set((
            collections::name.eq(payload.name),
            collections::description.eq(payload.description.filter(|d| !d.trim().is_empty())),
            collections::visibility.eq(visibility),
            collections::insight_ids.eq(insight_ids),
            collections::updated_at.eq(Utc::now()),
        ))
        .returning(Collection::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!("Collection {} updated by user {}", updated.id, user.id);

    Ok(Json(collection_service::populate(conn, updated)?))
}
