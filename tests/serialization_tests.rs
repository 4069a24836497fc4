use chrono::Utc;
use insightsync::models::models::{
    AddInsightRequest, ErrorResponse, InsightResponse, OwnerInfo, UserProfile,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_error_body_wire_shape() {
    let body = ErrorResponse {
        error: "Invalid credentials".to_string(),
    };

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, json!({ "error": "Invalid credentials" }));
}

#[test]
fn test_insight_response_uses_camel_case_keys() {
    let response = InsightResponse {
        id: Uuid::new_v4(),
        title: "Focus".to_string(),
        source: None,
        takeaway: "Cut distractions".to_string(),
        tags: vec!["focus".to_string()],
        visibility: "public".to_string(),
        owner: OwnerInfo {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
        },
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    assert!(value.get("created_at").is_none());
    assert_eq!(value["owner"]["displayName"], "Alice");
}

#[test]
fn test_user_profile_never_carries_credentials() {
    let profile = UserProfile {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        display_name: "Alice".to_string(),
        bio: String::new(),
        avatar: String::new(),
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("email").is_none());
    assert!(value.get("password").is_none());
    assert!(value.get("passwordHash").is_none());
    assert_eq!(value["displayName"], "Alice");
}

#[test]
fn test_add_insight_request_reads_insight_id_key() {
    let id = Uuid::new_v4();

    let request: AddInsightRequest = serde_json::from_value(json!({ "insightId": id })).unwrap();
    assert_eq!(request.insight_id, id);
}
