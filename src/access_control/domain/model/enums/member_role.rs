use std::str::FromStr;

use super::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MemberRole {
    Admin,
    Secretary,
    Treasurer,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Secretary => "secretario",
            Self::Treasurer => "tesorero",
            Self::Member => "miembro",
        }
    }
}

impl FromStr for MemberRole {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "secretario" => Ok(Self::Secretary),
            "tesorero" => Ok(Self::Treasurer),
            "miembro" => Ok(Self::Member),
            _ => Err(AccessControlDomainError::UnknownRole),
        }
    }
}
