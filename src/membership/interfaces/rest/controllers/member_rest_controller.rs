use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
};
use validator::Validate;

use crate::{
    membership::{
        domain::{
            model::{
                commands::{
                    change_member_status_command::ChangeMemberStatusCommand,
                    delete_member_command::DeleteMemberCommand,
                    register_member_command::RegisterMemberCommand,
                    update_member_command::UpdateMemberCommand,
                },
                enums::membership_domain_error::MembershipDomainError,
                queries::{
                    find_member_by_rut_query::FindMemberByRutQuery,
                    get_member_query::GetMemberQuery, list_members_query::ListMembersQuery,
                },
                validation::{member_form_validator, member_record::MemberRecord},
            },
            services::{
                member_command_service::MemberCommandService,
                member_query_service::MemberQueryService,
            },
        },
        interfaces::{
            acl::access_control_facade::{
                AccessControlFacade, MEMBERS_DELETE, MEMBERS_READ, MEMBERS_WRITE,
            },
            rest::resources::{
                change_member_status_request_resource::ChangeMemberStatusRequestResource,
                list_members_query_resource::ListMembersQueryResource,
                member_form_resource::MemberFormResource,
                member_resource::MemberResource,
                member_validation_resource::MemberValidationResource,
                membership_error_response_resource::MembershipErrorResponseResource,
            },
        },
    },
    shared::interfaces::rest::openapi::security::ROLE_HEADER_NAME,
};

type ErrorResponse = (StatusCode, Json<MembershipErrorResponseResource>);

#[derive(Clone)]
pub struct MembershipRestControllerState {
    pub command_service: Arc<dyn MemberCommandService>,
    pub query_service: Arc<dyn MemberQueryService>,
    pub access_control_facade: Arc<dyn AccessControlFacade>,
}

pub fn router(state: MembershipRestControllerState) -> Router {
    Router::new()
        .route("/members/validate", post(validate_member_form))
        .route("/members", post(register_member).get(list_members))
        .route("/members/rut/:rut", get(find_member_by_rut))
        .route(
            "/members/:member_id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/:member_id/status", patch(change_member_status))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/members/validate",
    tag = "membership",
    request_body = MemberFormResource,
    responses(
        (status = 200, description = "Validation outcome with the sanitized form when valid", body = MemberValidationResource),
        (status = 400, description = "Payload exceeds field limits", body = MembershipErrorResponseResource)
    )
)]
pub async fn validate_member_form(
    Json(request): Json<MemberFormResource>,
) -> Result<Json<MemberValidationResource>, ErrorResponse> {
    validate_request(&request)?;

    let record = MemberRecord::from(request);
    let outcome = member_form_validator::validate_and_sanitize(&record);

    Ok(Json(MemberValidationResource::from(outcome)))
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "membership",
    request_body = MemberFormResource,
    params(("x-orpheo-role" = String, Header, description = "Rol del usuario")),
    security(("orpheoRole" = [])),
    responses(
        (status = 201, description = "Member registered", body = MemberResource),
        (status = 401, description = "Role header missing", body = MembershipErrorResponseResource),
        (status = 403, description = "Role lacks members:write", body = MembershipErrorResponseResource),
        (status = 409, description = "RUT already registered", body = MembershipErrorResponseResource),
        (status = 422, description = "Invalid member form", body = MembershipErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = MembershipErrorResponseResource)
    )
)]
pub async fn register_member(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<MemberFormResource>,
) -> Result<(StatusCode, Json<MemberResource>), ErrorResponse> {
    authorize(&state, &headers, MEMBERS_WRITE).await?;
    validate_request(&request)?;

    let command =
        RegisterMemberCommand::new(MemberRecord::from(request)).map_err(map_domain_error)?;
    let member = state
        .command_service
        .handle_register(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(MemberResource::from(&member))))
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "membership",
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("grado" = Option<String>, Query, description = "aprendiz, companero o maestro"),
        ("estado" = Option<String>, Query, description = "activo, inactivo o suspendido")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 200, description = "Members ordered by surnames", body = [MemberResource]),
        (status = 400, description = "Unknown grade or status filter", body = MembershipErrorResponseResource),
        (status = 403, description = "Role lacks members:read", body = MembershipErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = MembershipErrorResponseResource)
    )
)]
pub async fn list_members(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ListMembersQueryResource>,
) -> Result<Json<Vec<MemberResource>>, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_READ).await?;

    let query = ListMembersQuery::new(query.grado, query.estado).map_err(map_domain_error)?;
    let members = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(members.iter().map(MemberResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/members/{member_id}",
    tag = "membership",
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("member_id" = String, Path, description = "Member UUID")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 200, description = "Member", body = MemberResource),
        (status = 400, description = "Invalid member id", body = MembershipErrorResponseResource),
        (status = 404, description = "Member not found", body = MembershipErrorResponseResource)
    )
)]
pub async fn get_member(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
) -> Result<Json<MemberResource>, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_READ).await?;

    let query = GetMemberQuery::new(member_id).map_err(map_domain_error)?;
    let member = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MemberResource::from(&member)))
}

#[utoipa::path(
    get,
    path = "/members/rut/{rut}",
    tag = "membership",
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("rut" = String, Path, description = "RUT con o sin puntos y guion")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 200, description = "Member", body = MemberResource),
        (status = 400, description = "Invalid RUT", body = MembershipErrorResponseResource),
        (status = 404, description = "Member not found", body = MembershipErrorResponseResource)
    )
)]
pub async fn find_member_by_rut(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Path(rut): Path<String>,
) -> Result<Json<MemberResource>, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_READ).await?;

    let query = FindMemberByRutQuery::new(rut).map_err(map_domain_error)?;
    let member = state
        .query_service
        .handle_find_by_rut(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MemberResource::from(&member)))
}

#[utoipa::path(
    put,
    path = "/members/{member_id}",
    tag = "membership",
    request_body = MemberFormResource,
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("member_id" = String, Path, description = "Member UUID")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 200, description = "Member updated", body = MemberResource),
        (status = 404, description = "Member not found", body = MembershipErrorResponseResource),
        (status = 409, description = "RUT belongs to another member", body = MembershipErrorResponseResource),
        (status = 422, description = "Invalid member form", body = MembershipErrorResponseResource)
    )
)]
pub async fn update_member(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    Json(request): Json<MemberFormResource>,
) -> Result<Json<MemberResource>, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_WRITE).await?;
    validate_request(&request)?;

    let command = UpdateMemberCommand::new(member_id, MemberRecord::from(request))
        .map_err(map_domain_error)?;
    let member = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MemberResource::from(&member)))
}

#[utoipa::path(
    patch,
    path = "/members/{member_id}/status",
    tag = "membership",
    request_body = ChangeMemberStatusRequestResource,
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("member_id" = String, Path, description = "Member UUID")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 200, description = "Status changed", body = MemberResource),
        (status = 400, description = "Unknown status or no-op transition", body = MembershipErrorResponseResource),
        (status = 404, description = "Member not found", body = MembershipErrorResponseResource)
    )
)]
pub async fn change_member_status(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    Json(request): Json<ChangeMemberStatusRequestResource>,
) -> Result<Json<MemberResource>, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_WRITE).await?;
    validate_request(&request)?;

    let command =
        ChangeMemberStatusCommand::new(member_id, request.estado).map_err(map_domain_error)?;
    let member = state
        .command_service
        .handle_change_status(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MemberResource::from(&member)))
}

#[utoipa::path(
    delete,
    path = "/members/{member_id}",
    tag = "membership",
    params(
        ("x-orpheo-role" = String, Header, description = "Rol del usuario"),
        ("member_id" = String, Path, description = "Member UUID")
    ),
    security(("orpheoRole" = [])),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 403, description = "Role lacks members:delete", body = MembershipErrorResponseResource),
        (status = 404, description = "Member not found", body = MembershipErrorResponseResource)
    )
)]
pub async fn delete_member(
    State(state): State<MembershipRestControllerState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    authorize(&state, &headers, MEMBERS_DELETE).await?;

    let command = DeleteMemberCommand::new(member_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn authorize(
    state: &MembershipRestControllerState,
    headers: &HeaderMap,
    capability: &str,
) -> Result<(), ErrorResponse> {
    let role = headers
        .get(ROLE_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| map_domain_error(MembershipDomainError::MissingRole))?;

    state
        .access_control_facade
        .ensure_capability(role, capability)
        .await
        .map_err(map_domain_error)
}

fn validate_request<T: Validate>(request: &T) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(MembershipErrorResponseResource {
                message: validation_error.to_string(),
                errors: None,
            }),
        )
    })
}

fn map_domain_error(error: MembershipDomainError) -> ErrorResponse {
    let status = match &error {
        MembershipDomainError::InvalidMemberForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MembershipDomainError::InvalidRut
        | MembershipDomainError::InvalidMemberId
        | MembershipDomainError::InvalidGrade
        | MembershipDomainError::InvalidStatus
        | MembershipDomainError::IncompleteMemberProfile(_)
        | MembershipDomainError::InvalidStatusTransition => StatusCode::BAD_REQUEST,
        MembershipDomainError::MemberAlreadyRegistered => StatusCode::CONFLICT,
        MembershipDomainError::MemberNotFound => StatusCode::NOT_FOUND,
        MembershipDomainError::MissingRole => StatusCode::UNAUTHORIZED,
        MembershipDomainError::AccessDenied => StatusCode::FORBIDDEN,
        MembershipDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let errors = match &error {
        MembershipDomainError::InvalidMemberForm(form_errors) => {
            Some(form_errors.to_message_map())
        }
        _ => None,
    };

    (
        status,
        Json(MembershipErrorResponseResource {
            message: error.to_string(),
            errors,
        }),
    )
}
