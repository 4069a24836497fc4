use insightsync::models::models::{CollectionRequest, InsightRequest, RegisterRequest};
use insightsync::utility::{dedupe_ids, normalize_tags, validate_visibility};
use uuid::Uuid;
use validator::Validate;

fn register_request() -> RegisterRequest {
    RegisterRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret1".to_string(),
        display_name: None,
    }
}

#[test]
fn test_register_request_validation() {
    assert!(register_request().validate().is_ok());

    let mut bad_email = register_request();
    bad_email.email = "not-an-email".to_string();
    assert!(bad_email.validate().is_err());

    let mut short_password = register_request();
    short_password.password = "abc".to_string();
    assert!(short_password.validate().is_err());

    let mut short_username = register_request();
    short_username.username = "ab".to_string();
    assert!(short_username.validate().is_err());

    // padding must not satisfy the length rule: "  a  " stores as "a"
    let mut padded_username = register_request();
    padded_username.username = "  a  ".to_string();
    assert!(padded_username.validate().is_err());

    let mut long_username = register_request();
    long_username.username = "a".repeat(31);
    assert!(long_username.validate().is_err());
}

#[test]
fn test_insight_request_validation() {
    let request = InsightRequest {
        title: "Focus".to_string(),
        source: None,
        takeaway: "Cut distractions".to_string(),
        tags: vec!["productivity".to_string()],
        visibility: Some("private".to_string()),
    };
    assert!(request.validate().is_ok());

    let mut missing_title = request.clone();
    missing_title.title = String::new();
    assert!(missing_title.validate().is_err());

    let mut bad_visibility = request.clone();
    bad_visibility.visibility = Some("internal".to_string());
    assert!(bad_visibility.validate().is_err());

    let mut omitted_visibility = request;
    omitted_visibility.visibility = None;
    assert!(omitted_visibility.validate().is_ok());
}

#[test]
fn test_collection_request_validation() {
    let request = CollectionRequest {
        name: "Reading List".to_string(),
        description: None,
        visibility: None,
        insights: None,
    };
    assert!(request.validate().is_ok());

    let unnamed = CollectionRequest {
        name: String::new(),
        ..Default::default()
    };
    assert!(unnamed.validate().is_err());
}

#[test]
fn test_visibility_values() {
    assert!(validate_visibility("public").is_ok());
    assert!(validate_visibility("private").is_ok());
    assert!(validate_visibility("Public").is_err());
    assert!(validate_visibility("hidden").is_err());
}

#[test]
fn test_normalize_tags() {
    let tags = vec![
        " productivity ".to_string(),
        "focus".to_string(),
        "   ".to_string(),
        String::new(),
    ];
    assert_eq!(normalize_tags(tags), vec!["productivity", "focus"]);
}

#[test]
fn test_dedupe_ids_preserves_first_seen_order() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let ids = vec![a, b, a, b, a];
    assert_eq!(dedupe_ids(ids), vec![a, b]);
}
