use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("role is unknown; use admin, secretario, tesorero or miembro")]
    UnknownRole,

    #[error("capability is unknown")]
    UnknownCapability,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
