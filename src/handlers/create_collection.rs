use crate::error::ApiError;
use crate::models::models::{
    AppState, Collection, CollectionRequest, CollectionResponse, NewCollection, User,
    VISIBILITY_PUBLIC,
};
use crate::schema::collections;
use crate::services::collection_service;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/collections",
    request_body = CollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(payload): Json<CollectionRequest>,
) -> Result<(StatusCode, Json<CollectionResponse>), ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let initial_members =
        collection_service::filter_existing(conn, payload.insights.unwrap_or_default())?;

    let collection: Collection = diesel::insert_into(collections::table)
        .values(NewCollection {
            user_id: user.id,
            name: payload.name,
            description: payload.description.filter(|d| !d.trim().is_empty()),
            visibility: payload
                .visibility
                .unwrap_or_else(|| VISIBILITY_PUBLIC.to_string()),
            insight_ids: initial_members,
        })
        .returning(Collection::as_returning())
        .get_result(conn)
        .map_err(ApiError::Database)?;

    info!("Collection {} created by user {}", collection.id, user.id);

    let response = collection_service::populate(conn, collection)?;
    Ok((StatusCode::CREATED, Json(response)))
}
