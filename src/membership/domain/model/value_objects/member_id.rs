use uuid::Uuid;

use crate::membership::domain::model::enums::membership_domain_error::MembershipDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new(value: String) -> Result<Self, MembershipDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| MembershipDomainError::InvalidMemberId)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}
