use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionResponse, VISIBILITY_PUBLIC};
use crate::schema::{collections, users};
use crate::services::collection_service;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/collections/user/{username}",
    params(("username" = String, Path, description = "Owner's username")),
    responses(
        (status = 200, description = "That user's public collections, newest first", body = [CollectionResponse]),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collections"
)]
pub async fn user_collections(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let owner_id: Uuid = users::table
        .filter(users::username.eq(&username))
        .select(users::id)
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let rows: Vec<Collection> = collections::table
        .filter(collections::user_id.eq(owner_id))
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
