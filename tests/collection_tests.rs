use insightsync::services::collection_service::{add_member, remove_member};
use uuid::Uuid;

#[test]
fn test_add_member_appends_only_when_absent() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let members = add_member(&[a], b).expect("new member should be appended");
    assert_eq!(members, vec![a, b]);
}

#[test]
fn test_add_member_twice_leaves_no_duplicate() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let members = add_member(&[a], b).expect("new member should be appended");

    // a second add of the same id reports the list as unchanged
    assert!(add_member(&members, b).is_none());
    assert_eq!(members.iter().filter(|id| **id == b).count(), 1);
}

#[test]
fn test_remove_member_drops_the_id() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let members = remove_member(vec![a, b], b);
    assert_eq!(members, vec![a]);
}

#[test]
fn test_remove_member_of_absent_id_is_a_no_op() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let members = remove_member(vec![a], b);
    assert_eq!(members, vec![a]);

    let members = remove_member(Vec::new(), b);
    assert!(members.is_empty());
}
