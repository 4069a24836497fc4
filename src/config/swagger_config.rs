use crate::handlers::{
    add_collection_insight::__path_add_collection_insight,
    create_collection::__path_create_collection, create_insight::__path_create_insight,
    current_user::__path_current_user, delete_collection::__path_delete_collection,
    delete_insight::__path_delete_insight, get_collection::__path_get_collection,
    health::__path_health_check, list_collections::__path_list_collections,
    list_insights::__path_list_insights, login::__path_login,
    my_collections::__path_my_collections, my_insights::__path_my_insights,
    public_collections::__path_public_collections, register::__path_register,
    remove_collection_insight::__path_remove_collection_insight,
    update_collection::__path_update_collection, update_insight::__path_update_insight,
    update_profile::__path_update_profile, user_collections::__path_user_collections,
    user_insights::__path_user_insights, user_profile::__path_user_profile,
};
use crate::models::models::*;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        register, login, current_user, update_profile, user_profile,
        list_insights, my_insights, user_insights, create_insight,
        update_insight, delete_insight,
        list_collections, my_collections, public_collections, user_collections,
        get_collection, create_collection, update_collection, delete_collection,
        add_collection_insight, remove_collection_insight,
        health_check
    ),
    components(schemas(
        RegisterRequest, LoginRequest, UpdateProfileRequest, InsightRequest,
        CollectionRequest, AddInsightRequest, AuthResponse, ProfileResponse,
        UserProfile, OwnerInfo, InsightResponse, CollectionResponse,
        MessageResponse, ErrorResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Account registration, login and profiles"),
        (name = "Insights", description = "Insight note management"),
        (name = "Collections", description = "Collection and membership management"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
