use std::str::FromStr;

use crate::access_control::domain::model::enums::{
    access_control_domain_error::AccessControlDomainError, capability::Capability,
    member_role::MemberRole,
};

#[derive(Clone, Debug)]
pub struct EvaluateCapabilityQuery {
    role: MemberRole,
    capability: Capability,
}

impl EvaluateCapabilityQuery {
    pub fn new(role: String, capability: String) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            role: MemberRole::from_str(&role)?,
            capability: Capability::from_str(&capability)?,
        })
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }
}
