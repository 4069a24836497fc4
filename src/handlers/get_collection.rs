use crate::error::ApiError;
use crate::models::models::{AppState, CollectionResponse, User};
use crate::services::{authorization::visible_to, collection_service};
use axum::{
    extract::{Extension, Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "The collection, populated", body = CollectionResponse),
        (status = 404, description = "Collection not found or not visible"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Option<User>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let collection = collection_service::find(conn, id)?;

    // A hidden private collection looks exactly like a missing one, so the
    // response never leaks its existence.
    let viewer_id = viewer.as_ref().map(|user| user.id);
    if !visible_to(&collection, viewer_id) {
        return Err(ApiError::NotFound("Collection not found".to_string()));
    }

    Ok(Json(collection_service::populate(conn, collection)?))
}
