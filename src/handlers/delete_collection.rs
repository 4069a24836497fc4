use crate::error::ApiError;
use crate::models::models::{AppState, MessageResponse, User};
use crate::schema::collections;
use crate::services::{authorization::ensure_owner, collection_service};
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
    path = "/api/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let collection = collection_service::find(conn, id)?;
    ensure_owner(&collection, user.id)?;

    diesel::delete(collections::table.find(id))
        .execute(conn)
        .map_err(ApiError::Database)?;

    info!("Collection {} deleted by user {}", id, user.id);

    Ok(Json(MessageResponse {
        message: "Collection deleted successfully".to_string(),
    }))
}
