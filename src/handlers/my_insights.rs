use crate::error::ApiError;
use crate::models::models::{AppState, Insight, InsightResponse, User};
use crate::schema::insights;
use axum::{
    extract::{Extension, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/insights/my",
    responses(
        (status = 200, description = "All of the caller's insights, newest first", body = [InsightResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Insights"
)]
pub async fn my_insights(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<InsightResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let rows: Vec<Insight> = insights::table
        .filter(insights::user_id.eq(user.id))
        .order(insights::created_at.desc())
        .select(Insight::as_select())
        .load(conn)
        .map_err(ApiError::Database)?;

    let responses = rows
        .into_iter()
        .map(|insight| {
            InsightResponse::from_row((
                insight,
                (user.id, user.username.clone(), user.display_name.clone()),
            ))
        })
        .collect();

    Ok(Json(responses))
}
