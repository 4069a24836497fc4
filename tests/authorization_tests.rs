use chrono::Utc;
use insightsync::error::ApiError;
use insightsync::models::models::{Collection, Insight};
use insightsync::services::authorization::{ensure_owner, visible_to};
use uuid::Uuid;

fn insight(owner: Uuid, visibility: &str) -> Insight {
    Insight {
        id: Uuid::new_v4(),
        user_id: owner,
        title: "The Power of Focus".to_string(),
        source: None,
        takeaway: "Eliminate distractions.".to_string(),
        tags: vec!["focus".to_string()],
        visibility: visibility.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn collection(owner: Uuid, visibility: &str) -> Collection {
    Collection {
        id: Uuid::new_v4(),
        user_id: owner,
        name: "Reading List".to_string(),
        description: None,
        visibility: visibility.to_string(),
        insight_ids: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_owner_may_mutate() {
    let owner = Uuid::new_v4();
    assert!(ensure_owner(&insight(owner, "public"), owner).is_ok());
    assert!(ensure_owner(&collection(owner, "private"), owner).is_ok());
}

#[test]
fn test_non_owner_is_forbidden() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let result = ensure_owner(&insight(owner, "public"), stranger);
    assert!(matches!(result, Err(ApiError::Forbidden(_))));

    let result = ensure_owner(&collection(owner, "public"), stranger);
    assert!(matches!(result, Err(ApiError::Forbidden(_))));
}

#[test]
fn test_public_records_visible_to_everyone() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let record = insight(owner, "public");

    assert!(visible_to(&record, None));
    assert!(visible_to(&record, Some(stranger)));
    assert!(visible_to(&record, Some(owner)));
}

#[test]
fn test_private_records_visible_only_to_owner() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let record = collection(owner, "private");

    assert!(!visible_to(&record, None));
    assert!(!visible_to(&record, Some(stranger)));
    assert!(visible_to(&record, Some(owner)));
}
