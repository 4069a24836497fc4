use crate::error::ApiError;
use crate::models::models::{AppState, Insight, InsightResponse, OwnerRow, User, VISIBILITY_PUBLIC};
use crate::schema::{insights, users};
use axum::{
    extract::{Extension, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/insights",
    responses(
        (status = 200, description = "Visible insights, newest first", body = [InsightResponse]),
        (status = 401, description = "Token present but invalid"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Insights"
)]
pub async fn list_insights(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Option<User>>,
) -> Result<Json<Vec<InsightResponse>>, ApiError> {
    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let mut query = insights::table
        .inner_join(users::table)
        .select((
            Insight::as_select(),
            (users::id, users::username, users::display_name),
        ))
        .into_boxed();

    query = match &viewer {
        Some(user) => query.filter(
            insights::visibility
                .eq(VISIBILITY_PUBLIC)
                .or(insights::user_id.eq(user.id)),
        ),
        None => query.filter(insights::visibility.eq(VISIBILITY_PUBLIC)),
    };

    let rows: Vec<(Insight, OwnerRow)> = query
        .order(insights::created_at.desc())
        .load(conn)
        .map_err(ApiError::Database)?;

    Ok(Json(rows.into_iter().map(InsightResponse::from_row).collect()))
}
