use thiserror::Error;

use crate::membership::domain::model::validation::member_form_errors::MemberFormErrors;

#[derive(Debug, Error)]
pub enum MembershipDomainError {
    #[error("member form has {} invalid field(s)", .0.len())]
    InvalidMemberForm(MemberFormErrors),

    #[error("rut is invalid")]
    InvalidRut,

    #[error("member id is invalid")]
    InvalidMemberId,

    #[error("member grade is invalid; use aprendiz, companero or maestro")]
    InvalidGrade,

    #[error("member status is invalid; use activo, inactivo or suspendido")]
    InvalidStatus,

    #[error("member profile is missing required field {0}")]
    IncompleteMemberProfile(&'static str),

    #[error("member already registered with this rut")]
    MemberAlreadyRegistered,

    #[error("member not found")]
    MemberNotFound,

    #[error("invalid status transition")]
    InvalidStatusTransition,

    #[error("role header x-orpheo-role is required")]
    MissingRole,

    #[error("access denied")]
    AccessDenied,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
