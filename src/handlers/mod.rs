pub mod add_collection_insight;
pub mod create_collection;
pub mod create_insight;
pub mod current_user;
pub mod delete_collection;
pub mod delete_insight;
pub mod get_collection;
pub mod health;
pub mod list_collections;
pub mod list_insights;
pub mod login;
pub mod my_collections;
pub mod my_insights;
pub mod public_collections;
pub mod register;
pub mod remove_collection_insight;
pub mod update_collection;
pub mod update_insight;
pub mod update_profile;
pub mod user_collections;
pub mod user_insights;
pub mod user_profile;
