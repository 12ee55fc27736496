use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use orpheo_api::access_control::interfaces::rest::{
    controllers::access_control_rest_controller::{evaluate_capability, list_role_permissions},
    resources::evaluate_capability_request_resource::EvaluateCapabilityRequestResource,
};

use crate::support::create_controller_state;

#[tokio::test]
async fn list_role_permissions_returns_capabilities_in_catalog_order() {
    let Json(resource) =
        list_role_permissions(State(create_controller_state()), Path("Miembro".to_string()))
            .await
            .expect("permissions expected");

    assert_eq!(resource.role, "miembro");
    assert_eq!(
        resource.permissions,
        vec!["documents:read", "programs:read", "attendance:read"]
    );
}

#[tokio::test]
async fn list_role_permissions_returns_not_found_for_unknown_role() {
    let result =
        list_role_permissions(State(create_controller_state()), Path("visitante".to_string()))
            .await;

    assert!(matches!(result, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn evaluate_returns_decision() {
    let Json(response) = evaluate_capability(
        State(create_controller_state()),
        Json(EvaluateCapabilityRequestResource {
            role: "secretario".to_string(),
            capability: "members:delete".to_string(),
        }),
    )
    .await
    .expect("decision expected");

    assert!(!response.allowed);
    assert_eq!(response.reason, "role secretario lacks members:delete");
}

#[tokio::test]
async fn evaluate_returns_not_found_for_unknown_capability() {
    let result = evaluate_capability(
        State(create_controller_state()),
        Json(EvaluateCapabilityRequestResource {
            role: "admin".to_string(),
            capability: "members:export".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn evaluate_rejects_blank_fields() {
    let result = evaluate_capability(
        State(create_controller_state()),
        Json(EvaluateCapabilityRequestResource {
            role: String::new(),
            capability: "members:read".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}
