//! In-process client for the InsightSync API: a typed HTTP wrapper plus
//! the view-state derivation the UI runs on top of fetched lists.

pub mod api;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use view::{InsightBoard, SortField, SortOrder};
