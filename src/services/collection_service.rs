use crate::error::ApiError;
use crate::models::models::{Collection, CollectionResponse, Insight, InsightResponse, OwnerRow};
use crate::schema::{collections, insights, users};
use crate::utility::dedupe_ids;
use diesel::prelude::*;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

pub fn find(conn: &mut PgConnection, collection_id: Uuid) -> Result<Collection, ApiError> {
    collections::table
        .find(collection_id)
        .select(Collection::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))
}

/// Resolves a collection's owner and member insights into a response.
///
/// Members come back in the stored membership order. Ids that no longer
/// resolve to an insight are skipped rather than surfaced as holes.
pub fn populate(
    conn: &mut PgConnection,
    collection: Collection,
) -> Result<CollectionResponse, ApiError> {
    let owner: OwnerRow = users::table
        .find(collection.user_id)
        .select((users::id, users::username, users::display_name))
        .first(conn)
        .map_err(ApiError::Database)?;

    let rows: Vec<(Insight, OwnerRow)> = insights::table
        .inner_join(users::table)
        .filter(insights::id.eq_any(&collection.insight_ids))
        .select((
            Insight::as_select(),
            (users::id, users::username, users::display_name),
        ))
        .load(conn)
        .map_err(ApiError::Database)?;

    let mut by_id: HashMap<Uuid, InsightResponse> = rows
        .into_iter()
        .map(|row| (row.0.id, InsightResponse::from_row(row)))
        .collect();

    let members = collection
        .insight_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect();

    Ok(CollectionResponse {
        id: collection.id,
        name: collection.name,
        description: collection.description,
        visibility: collection.visibility,
        owner: owner.into(),
        insights: members,
        created_at: collection.created_at,
        updated_at: collection.updated_at,
    })
}

/// Deduplicates a requested membership list and keeps only ids that refer
/// to existing insights, preserving request order.
pub fn filter_existing(conn: &mut PgConnection, ids: Vec<Uuid>) -> Result<Vec<Uuid>, ApiError> {
    let deduped = dedupe_ids(ids);
    if deduped.is_empty() {
        return Ok(deduped);
    }

    let existing: HashSet<Uuid> = insights::table
        .filter(insights::id.eq_any(&deduped))
        .select(insights::id)
        .load::<Uuid>(conn)
        .map_err(ApiError::Database)?
        .into_iter()
        .collect();

    Ok(deduped
        .into_iter()
        .filter(|id| existing.contains(id))
        .collect())
}

/// Appends an insight to a membership list unless it is already a member.
/// Returns `None` when the list is unchanged, so callers can skip the
/// write entirely.
pub fn add_member(ids: &[Uuid], insight_id: Uuid) -> Option<Vec<Uuid>> {
    if ids.contains(&insight_id) {
        return None;
    }
    let mut members = ids.to_vec();
    members.push(insight_id);
    Some(members)
}

/// Removes an insight from a membership list. Absent ids are a no-op.
pub fn remove_member(mut ids: Vec<Uuid>, insight_id: Uuid) -> Vec<Uuid> {
    ids.retain(|member| *member != insight_id);
    ids
}
