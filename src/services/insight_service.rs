use crate::error::ApiError;
use crate::models::models::Insight;
use crate::schema::insights;
use diesel::prelude::*;
use uuid::Uuid;

pub fn find(conn: &mut PgConnection, insight_id: Uuid) -> Result<Insight, ApiError> {
    insights::table
        .find(insight_id)
        .select(Insight::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound("Insight not found".to_string()))
}
