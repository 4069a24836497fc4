use crate::schema::*;
use crate::utility::{validate_password, validate_username, validate_visibility};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2;
use diesel::r2d2::ConnectionManager;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const VISIBILITY_PUBLIC: &str = "public";
pub const VISIBILITY_PRIVATE: &str = "private";

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = users)]
pub struct UserChanges {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = crate::schema::insights)]
pub struct Insight {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub source: Option<String>,
    pub takeaway: String,
    pub tags: Vec<String>,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = insights)]
pub struct NewInsight {
    pub user_id: Uuid,
    pub title: String,
    pub source: Option<String>,
    pub takeaway: String,
    pub tags: Vec<String>,
    pub visibility: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = crate::schema::collections)]
pub struct Collection {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub visibility: String,
    pub insight_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = collections)]
pub struct NewCollection {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub visibility: String,
    pub insight_ids: Vec<Uuid>,
}

type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// ---------- auth ----------

#[derive(Deserialize, Serialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6), custom(function = "validate_password"))]
    pub password: String,
    #[serde(rename = "displayName", default)]
    #[validate(length(max = 50, message = "Display name must be at most 50 characters"))]
    pub display_name: Option<String>,
}

#[derive(Deserialize, Serialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public view of a user. Never carries the password hash or email.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[derive(Deserialize, Serialize, ToSchema, Validate, Default)]
pub struct UpdateProfileRequest {
    #[serde(rename = "displayName", default)]
    #[validate(length(max = 50, message = "Display name must be at most 50 characters"))]
    pub display_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

// ---------- insights ----------

#[derive(Deserialize, Serialize, ToSchema, Validate, Debug, Clone, Default)]
pub struct InsightRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[validate(length(min = 1, message = "Takeaway is required"))]
    pub takeaway: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_visibility"))]
    pub visibility: Option<String>,
}

/// Owner summary attached to insight and collection responses.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OwnerInfo {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
}

pub type OwnerRow = (Uuid, String, String);

impl From<OwnerRow> for OwnerInfo {
    fn from((id, username, display_name): OwnerRow) -> Self {
        OwnerInfo {
            id,
            username,
            display_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub id: Uuid,
    pub title: String,
    pub source: Option<String>,
    pub takeaway: String,
    pub tags: Vec<String>,
    pub visibility: String,
    pub owner: OwnerInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InsightResponse {
    pub fn from_row((insight, owner): (Insight, OwnerRow)) -> Self {
        InsightResponse {
            id: insight.id,
            title: insight.title,
            source: insight.source,
            takeaway: insight.takeaway,
            tags: insight.tags,
            visibility: insight.visibility,
            owner: owner.into(),
            created_at: insight.created_at,
            updated_at: insight.updated_at,
        }
    }
}

// ---------- collections ----------

#[derive(Deserialize, Serialize, ToSchema, Validate, Debug, Default)]
pub struct CollectionRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_visibility"))]
    pub visibility: Option<String>,
    #[serde(default)]
    pub insights: Option<Vec<Uuid>>,
}

#[derive(Deserialize, Serialize, ToSchema, Debug)]
pub struct AddInsightRequest {
    #[serde(rename = "insightId")]
    pub insight_id: Uuid,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub visibility: String,
    pub owner: OwnerInfo,
    pub insights: Vec<InsightResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
