use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::{
    access_control::{
        domain::model::enums::access_control_domain_error::AccessControlDomainError,
        interfaces::acl::access_control_facade::{
            AccessControlFacade as AccessControlBcFacade, CapabilityCheckRequest,
        },
    },
    membership::{
        domain::model::enums::membership_domain_error::MembershipDomainError,
        interfaces::acl::access_control_facade::AccessControlFacade,
    },
};

pub struct AccessControlFacadeRealImpl {
    facade: Arc<dyn AccessControlBcFacade>,
}

impl AccessControlFacadeRealImpl {
    pub fn new(facade: Arc<dyn AccessControlBcFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeRealImpl {
    async fn ensure_capability(
        &self,
        role: &str,
        capability: &str,
    ) -> Result<(), MembershipDomainError> {
        let decision = self
            .facade
            .check_capability(CapabilityCheckRequest {
                role: role.to_string(),
                capability: capability.to_string(),
            })
            .await
            .map_err(|e| match e {
                AccessControlDomainError::UnknownRole => MembershipDomainError::AccessDenied,
                other => MembershipDomainError::InfrastructureError(other.to_string()),
            })?;

        if decision.allowed {
            Ok(())
        } else {
            warn!(role, capability, reason = %decision.reason, "member operation denied");
            Err(MembershipDomainError::AccessDenied)
        }
    }
}
