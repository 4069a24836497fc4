use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionResponse, VISIBILITY_PUBLIC};
use crate::schema::collections;
use crate::services::collection_service;
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/collections/public",
    responses(
        (status = 200, description = "All public collections, newest first", body = [CollectionResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collections"
)]
pub async fn public_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let rows: Vec<Collection> = collections::table
        .filter(collections::visibility.eq(VISIBILITY_PUBLIC))
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
