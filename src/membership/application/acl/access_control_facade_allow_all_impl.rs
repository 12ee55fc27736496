use async_trait::async_trait;

use crate::membership::{
    domain::model::enums::membership_domain_error::MembershipDomainError,
    interfaces::acl::access_control_facade::AccessControlFacade,
};

pub struct AccessControlFacadeAllowAllImpl;

impl AccessControlFacadeAllowAllImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccessControlFacadeAllowAllImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeAllowAllImpl {
    async fn ensure_capability(
        &self,
        _role: &str,
        _capability: &str,
    ) -> Result<(), MembershipDomainError> {
        Ok(())
    }
}
