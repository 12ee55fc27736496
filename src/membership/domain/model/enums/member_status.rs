use std::str::FromStr;

use super::membership_domain_error::MembershipDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
            Self::Suspended => "suspendido",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = MembershipDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "activo" => Ok(Self::Active),
            "inactivo" => Ok(Self::Inactive),
            "suspendido" => Ok(Self::Suspended),
            _ => Err(MembershipDomainError::InvalidStatus),
        }
    }
}
