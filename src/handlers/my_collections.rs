use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionResponse, User};
use crate::schema::collections;
use crate::services::collection_service;
use axum::{
    extract::{Extension, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/collections/my",
    responses(
        (status = 200, description = "All of the caller's collections, newest first", body = [CollectionResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn my_collections(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let rows: Vec<Collection> = collections::table
        .filter(collections::user_id.eq(user.id))
        .order(collections::created_at.desc())
        .select(Collection::as_select())
        .load(conn)
        .map_err(ApiError::Database)?;

    let mut responses = Vec::with_capacity(rows.len());
    for collection in rows {
        responses.push(collection_service::populate(conn, collection)?);
    }

    Ok(Json(responses))
}
