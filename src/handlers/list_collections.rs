use crate::error::ApiError;
use crate::models::models::{AppState, Collection, CollectionResponse, User, VISIBILITY_PUBLIC};
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
    path = "/api/collections",
    responses(
        (status = 200, description = "Visible collections, newest first", body = [CollectionResponse]),
        (status = 401, description = "Token present but invalid"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Option<User>>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let mut query = collections::table
        .select(Collection::as_select())
        .into_boxed();

    query = match &viewer {
        Some(user) => query.filter(
            collections::visibility
                .eq(VISIBILITY_PUBLIC)
                .or(collections::user_id.eq(user.id)),
        ),
        None => query.filter(collections::visibility.eq(VISIBILITY_PUBLIC)),
    };

    let rows: Vec<Collection> = query
        .order(collections::created_at.desc())
        .load(conn)
        .map_err(ApiError::Database)?;

    let mut responses = Vec::with_capacity(rows.len());
    for collection in rows {
        responses.push(collection_service::populate(conn, collection)?);
    }

    Ok(Json(responses))
}
