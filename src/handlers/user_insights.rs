use crate::error::ApiError;
use crate::models::models::{AppState, Insight, InsightResponse, User, VISIBILITY_PUBLIC};
use crate::schema::{insights, users};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/insights/user/{username}",
    params(("username" = String, Path, description = "Owner's username")),
    responses(
        (status = 200, description = "That user's public insights, newest first", body = [InsightResponse]),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Insights"
)]
pub async fn user_insights(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<InsightResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let owner: User = users::table
        .filter(users::username.eq(&username))
        .select(User::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let rows: Vec<Insight> = insights::table
        .filter(insights::user_id.eq(owner.id))
        .filter(insights::visibility.eq(VISIBILITY_PUBLIC))
        .order(insights::created_at.desc())
        .select(Insight::as_select())
        .load(conn)
        .map_err(ApiError::Database)?;

    let responses = rows
        .into_iter()
        .map(|insight| {
            InsightResponse::from_row((
                insight,
                (owner.id, owner.username.clone(), owner.display_name.clone()),
            ))
        })
        .collect();

    Ok(Json(responses))
}
