use axum::{middleware, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::security_config::{auth_middleware, optional_auth_middleware};
use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    add_collection_insight::add_collection_insight, create_collection::create_collection,
    create_insight::create_insight, current_user::current_user,
    delete_collection::delete_collection, delete_insight::delete_insight,
    get_collection::get_collection, health::health_check, list_collections::list_collections,
    list_insights::list_insights, login::login, my_collections::my_collections,
    my_insights::my_insights, public_collections::public_collections, register::register,
    remove_collection_insight::remove_collection_insight, update_collection::update_collection,
    update_insight::update_insight, update_profile::update_profile,
    user_collections::user_collections, user_insights::user_insights, user_profile::user_profile,
};
use crate::models::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Public routes (no authentication)
    let public_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", axum::routing::get(health_check))
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/user/{username}", axum::routing::get(user_profile))
        .route(
            "/api/insights/user/{username}",
            axum::routing::get(user_insights),
        )
        .route(
            "/api/collections/public",
            axum::routing::get(public_collections),
        )
        .route(
            "/api/collections/user/{username}",
            axum::routing::get(user_collections),
        );

    // Routes that work anonymously but widen their scope for a valid token
    let optional_auth_router = Router::new()
        .route("/api/insights", axum::routing::get(list_insights))
        .route("/api/collections", axum::routing::get(list_collections))
        .route("/api/collections/{id}", axum::routing::get(get_collection))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    // Protected routes (require JWT authentication)
    let protected_router = Router::new()
        .route("/api/auth/me", axum::routing::get(current_user))
        .route("/api/auth/profile", axum::routing::put(update_profile))
        .route("/api/insights/my", axum::routing::get(my_insights))
        .route("/api/insights", axum::routing::post(create_insight))
        .route(
            "/api/insights/{id}",
            axum::routing::put(update_insight).delete(delete_insight),
        )
        .route("/api/collections/my", axum::routing::get(my_collections))
        .route("/api/collections", axum::routing::post(create_collection))
        .route(
            "/api/collections/{id}",
            axum::routing::put(update_collection).delete(delete_collection),
        )
        .route(
            "/api/collections/{id}/insights",
            axum::routing::post(add_collection_insight),
        )
        .route(
            "/api/collections/{id}/insights/{insight_id}",
            axum::routing::delete(remove_collection_insight),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_router)
        .merge(optional_auth_router)
        .merge(protected_router)
        .with_state(state)
}
