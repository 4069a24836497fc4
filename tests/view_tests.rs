use chrono::{Duration, Utc};
use insightsync::client::view::{InsightBoard, SortField, SortOrder};
use insightsync::models::models::{InsightResponse, OwnerInfo};
use uuid::Uuid;

fn owner() -> OwnerInfo {
    OwnerInfo {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        display_name: "Alice".to_string(),
    }
}

fn insight(title: &str, takeaway: &str, tags: &[&str], age_secs: i64) -> InsightResponse {
    let created = Utc::now() - Duration::seconds(age_secs);
    InsightResponse {
        id: Uuid::new_v4(),
        title: title.to_string(),
        source: None,
        takeaway: takeaway.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        visibility: "public".to_string(),
        owner: owner(),
        created_at: created,
        updated_at: created,
    }
}

fn titles(board: &InsightBoard) -> Vec<String> {
    board
        .visible()
        .iter()
        .map(|insight| insight.title.clone())
        .collect()
}

#[test]
fn test_default_order_is_newest_first() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("Oldest", "a", &[], 300),
        insight("Newest", "b", &[], 10),
        insight("Middle", "c", &[], 100),
    ]);

    assert_eq!(titles(&board), vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn test_title_sort_is_case_insensitive() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("Zebra", "a", &[], 10),
        insight("apple", "b", &[], 20),
    ]);
    board.sort_field = SortField::Title;
    board.sort_order = SortOrder::Asc;

    assert_eq!(titles(&board), vec!["apple", "Zebra"]);

    board.sort_order = SortOrder::Desc;
    assert_eq!(titles(&board), vec!["Zebra", "apple"]);
}

#[test]
fn test_sort_ties_keep_input_order() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("same", "first", &[], 10),
        insight("Same", "second", &[], 10),
        insight("SAME", "third", &[], 10),
    ]);
    board.sort_field = SortField::Title;
    board.sort_order = SortOrder::Asc;

    let takeaways: Vec<String> = board
        .visible()
        .iter()
        .map(|insight| insight.takeaway.clone())
        .collect();
    assert_eq!(takeaways, vec!["first", "second", "third"]);
}

#[test]
fn test_search_matches_title_or_takeaway() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("Deep Work", "Focus without distraction", &[], 10),
        insight("Journaling", "Write DAILY notes", &[], 20),
        insight("Stretching", "Loosen up", &[], 30),
    ]);

    board.search_term = "daily".to_string();
    assert_eq!(titles(&board), vec!["Journaling"]);

    board.search_term = "WORK".to_string();
    assert_eq!(titles(&board), vec!["Deep Work"]);
}

#[test]
fn test_tag_filter_is_substring_and_conjunctive_with_search() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("Deep Work", "Focus hard", &["productivity", "focus"], 10),
        insight("Inbox Zero", "Focus on email", &["productivity"], 20),
        insight("Trail Running", "Get outside", &["health"], 30),
    ]);

    board.tag_filter = "product".to_string();
    assert_eq!(titles(&board), vec!["Deep Work", "Inbox Zero"]);

    board.search_term = "hard".to_string();
    assert_eq!(titles(&board), vec!["Deep Work"]);
}

#[test]
fn test_empty_filters_match_everything() {
    let mut board = InsightBoard::new();
    board.set_insights(vec![
        insight("One", "a", &[], 10),
        insight("Two", "b", &["tagged"], 20),
    ]);

    assert_eq!(board.visible().len(), 2);

    board.search_term = "one".to_string();
    board.tag_filter = "tag".to_string();
    assert!(board.visible().is_empty());

    board.clear_filters();
    assert_eq!(board.visible().len(), 2);
}

#[test]
fn test_begin_edit_copies_fields_into_form() {
    let mut board = InsightBoard::new();
    let mut record = insight("Focus", "Cut distractions", &["productivity", "focus"], 10);
    record.source = Some("https://example.com/focus".to_string());
    record.visibility = "private".to_string();
    let id = record.id;
    board.set_insights(vec![record.clone()]);

    board.begin_edit(&record);

    assert!(board.is_editing());
    assert_eq!(board.edit_id(), Some(id));
    assert_eq!(board.form.title, "Focus");
    assert_eq!(board.form.source, "https://example.com/focus");
    assert_eq!(board.form.tags, "productivity, focus");

    let payload = board.payload();
    assert_eq!(payload.title, "Focus");
    assert_eq!(payload.tags, vec!["productivity", "focus"]);
    assert_eq!(payload.visibility.as_deref(), Some("private"));
}

#[test]
fn test_cancel_edit_clears_without_persisting() {
    let mut board = InsightBoard::new();
    let record = insight("Focus", "Cut distractions", &[], 10);
    board.set_insights(vec![record.clone()]);

    board.begin_edit(&record);
    board.cancel_edit();

    assert!(!board.is_editing());
    assert!(board.form.title.is_empty());
    assert_eq!(board.insights().len(), 1);
}

#[test]
fn test_payload_splits_and_trims_tags() {
    let mut board = InsightBoard::new();
    board.form.title = "Focus".to_string();
    board.form.takeaway = "Cut distractions".to_string();
    board.form.tags = " productivity , focus,, ".to_string();

    let payload = board.payload();
    assert_eq!(payload.tags, vec!["productivity", "focus"]);
    assert!(payload.source.is_none());
    assert!(payload.visibility.is_none());
}

#[test]
fn test_apply_saved_replaces_or_appends() {
    let mut board = InsightBoard::new();
    let record = insight("Focus", "Cut distractions", &[], 10);
    board.set_insights(vec![record.clone()]);

    board.begin_edit(&record);
    let mut updated = record.clone();
    updated.title = "Deep Focus".to_string();
    board.apply_saved(updated);

    assert!(!board.is_editing());
    assert_eq!(board.insights().len(), 1);
    assert_eq!(board.insights()[0].title, "Deep Focus");

    let fresh = insight("New Idea", "Try it", &[], 5);
    board.apply_saved(fresh);
    assert_eq!(board.insights().len(), 2);
}

#[test]
fn test_remove_drops_record_and_exits_edit_mode() {
    let mut board = InsightBoard::new();
    let record = insight("Focus", "Cut distractions", &[], 10);
    let id = record.id;
    board.set_insights(vec![record.clone()]);

    board.begin_edit(&record);
    board.remove(id);

    assert!(board.insights().is_empty());
    assert!(!board.is_editing());
}
