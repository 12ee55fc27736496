use std::str::FromStr;

use crate::access_control::domain::model::enums::{
    access_control_domain_error::AccessControlDomainError, member_role::MemberRole,
};

#[derive(Clone, Debug)]
pub struct RolePermissionsQuery {
    role: MemberRole,
}

impl RolePermissionsQuery {
    pub fn new(role: String) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            role: MemberRole::from_str(&role)?,
        })
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }
}
