use async_trait::async_trait;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Debug)]
pub struct CapabilityCheckRequest {
    pub role: String,
    pub capability: String,
}

#[derive(Clone, Debug)]
pub struct CapabilityCheckDecision {
    pub allowed: bool,
    pub reason: String,
}

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    async fn check_capability(
        &self,
        request: CapabilityCheckRequest,
    ) -> Result<CapabilityCheckDecision, AccessControlDomainError>;
}
