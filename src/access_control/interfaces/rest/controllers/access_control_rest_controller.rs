use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::{
                evaluate_capability_query::EvaluateCapabilityQuery,
                role_permissions_query::RolePermissionsQuery,
            },
        },
        services::access_control_query_service::AccessControlQueryService,
    },
    interfaces::rest::resources::{
        access_control_error_response_resource::AccessControlErrorResponseResource,
        evaluate_capability_request_resource::{
            EvaluateCapabilityRequestResource, EvaluateCapabilityResponseResource,
        },
        role_permissions_resource::RolePermissionsResource,
    },
};

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub query_service: Arc<dyn AccessControlQueryService>,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route(
            "/access-control/roles/:role/permissions",
            get(list_role_permissions),
        )
        .route("/access-control/evaluate", post(evaluate_capability))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/access-control/roles/{role}/permissions",
    tag = "access-control",
    params(("role" = String, Path, description = "admin, secretario, tesorero o miembro")),
    responses(
        (status = 200, description = "Capabilities granted to the role", body = RolePermissionsResource),
        (status = 404, description = "Unknown role", body = AccessControlErrorResponseResource)
    )
)]
pub async fn list_role_permissions(
    State(state): State<AccessControlRestControllerState>,
    Path(role): Path<String>,
) -> Result<Json<RolePermissionsResource>, (StatusCode, Json<AccessControlErrorResponseResource>)> {
    let query = RolePermissionsQuery::new(role).map_err(map_domain_error)?;
    let role = query.role();

    let permissions = state
        .query_service
        .handle_role_permissions(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(RolePermissionsResource {
        role: role.as_str().to_string(),
        permissions: permissions
            .into_iter()
            .map(|capability| capability.as_str().to_string())
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/access-control/evaluate",
    tag = "access-control",
    request_body = EvaluateCapabilityRequestResource,
    responses(
        (status = 200, description = "Capability decision", body = EvaluateCapabilityResponseResource),
        (status = 400, description = "Invalid request", body = AccessControlErrorResponseResource),
        (status = 404, description = "Unknown role or capability", body = AccessControlErrorResponseResource)
    )
)]
pub async fn evaluate_capability(
    State(state): State<AccessControlRestControllerState>,
    Json(request): Json<EvaluateCapabilityRequestResource>,
) -> Result<
    Json<EvaluateCapabilityResponseResource>,
    (StatusCode, Json<AccessControlErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AccessControlErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = EvaluateCapabilityQuery::new(request.role, request.capability)
        .map_err(map_domain_error)?;
    let decision = state
        .query_service
        .handle_evaluate_capability(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EvaluateCapabilityResponseResource {
        allowed: decision.allowed,
        reason: decision.reason,
    }))
}

fn map_domain_error(
    error: AccessControlDomainError,
) -> (StatusCode, Json<AccessControlErrorResponseResource>) {
    let status = match error {
        AccessControlDomainError::UnknownRole | AccessControlDomainError::UnknownCapability => {
            StatusCode::NOT_FOUND
        }
        AccessControlDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AccessControlErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
