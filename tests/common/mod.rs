use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use insightsync::models::models::AppState;
use std::sync::Arc;

/// Create a test database pool. It is never connected: these tests only
/// exercise logic that does not touch the database.
#[allow(dead_code)]
pub fn create_test_db_pool() -> Pool<ConnectionManager<PgConnection>> {
    Pool::builder().build_unchecked(ConnectionManager::<PgConnection>::new("postgres://invalid"))
}

/// Create a test AppState
#[allow(dead_code)]
pub fn create_test_app_state() -> Arc<AppState> {
    Arc::new(AppState {
        db: create_test_db_pool(),
        jwt_secret: "test_secret_key_minimum_32_characters_long_for_testing".to_string(),
    })
}
