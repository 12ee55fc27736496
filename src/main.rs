use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use orpheo_api::{
    access_control::{
        build_access_control_facade, build_access_control_query_service,
        build_access_control_router,
        interfaces::rest::resources::{
            access_control_error_response_resource::AccessControlErrorResponseResource,
            evaluate_capability_request_resource::{
                EvaluateCapabilityRequestResource, EvaluateCapabilityResponseResource,
            },
            role_permissions_resource::RolePermissionsResource,
        },
    },
    config::app_config::AppConfig,
    membership::{
        build_membership_router,
        interfaces::rest::resources::{
            change_member_status_request_resource::ChangeMemberStatusRequestResource,
            list_members_query_resource::ListMembersQueryResource,
            member_form_resource::MemberFormResource, member_resource::MemberResource,
            member_validation_resource::MemberValidationResource,
            membership_error_response_resource::MembershipErrorResponseResource,
        },
    },
    shared::{
        infrastructure::storage::in_memory_key_value_store::InMemoryKeyValueStore,
        interfaces::rest::openapi::security::RoleHeaderSecurityAddon,
    },
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::validate_member_form,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::register_member,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::list_members,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::get_member,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::find_member_by_rut,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::update_member,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::change_member_status,
        orpheo_api::membership::interfaces::rest::controllers::member_rest_controller::delete_member,
        orpheo_api::access_control::interfaces::rest::controllers::access_control_rest_controller::list_role_permissions,
        orpheo_api::access_control::interfaces::rest::controllers::access_control_rest_controller::evaluate_capability
    ),
    components(
        schemas(
            MemberFormResource,
            MemberResource,
            MemberValidationResource,
            ChangeMemberStatusRequestResource,
            ListMembersQueryResource,
            MembershipErrorResponseResource,
            RolePermissionsResource,
            EvaluateCapabilityRequestResource,
            EvaluateCapabilityResponseResource,
            AccessControlErrorResponseResource
        )
    ),
    tags(
        (name = "membership", description = "Member registry, RUT and form validation"),
        (name = "access-control", description = "Role to capability grants")
    ),
    modifiers(&RoleHeaderSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("orpheo_api=info,tower_http=info"))
        .expect("valid log filter");
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false))
        .init();

    let config = AppConfig::from_env();

    let access_control_query_service = build_access_control_query_service();
    let access_control_facade = build_access_control_facade(access_control_query_service.clone());
    let key_value_store = Arc::new(InMemoryKeyValueStore::new());

    let membership_router =
        build_membership_router(&config, key_value_store, access_control_facade)
            .await
            .expect("failed to build membership router");
    let access_control_router = build_access_control_router(access_control_query_service);

    let app = Router::new()
        .merge(membership_router)
        .merge(access_control_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("Servidor corriendo en http://localhost:{}", config.port);
    info!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
