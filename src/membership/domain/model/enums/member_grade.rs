use std::str::FromStr;

use super::membership_domain_error::MembershipDomainError;

/// Membership rank. Variants are declared in ascending order so `Ord` follows the tiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MemberGrade {
    Apprentice,
    Fellow,
    Master,
}

impl MemberGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apprentice => "aprendiz",
            Self::Fellow => "companero",
            Self::Master => "maestro",
        }
    }
}

impl FromStr for MemberGrade {
    type Err = MembershipDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "aprendiz" => Ok(Self::Apprentice),
            "companero" | "compañero" => Ok(Self::Fellow),
            "maestro" => Ok(Self::Master),
            _ => Err(MembershipDomainError::InvalidGrade),
        }
    }
}
