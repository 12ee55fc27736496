use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::evaluate_capability_query::EvaluateCapabilityQuery,
        },
        services::access_control_query_service::AccessControlQueryService,
    },
    interfaces::acl::access_control_facade::{
        AccessControlFacade, CapabilityCheckDecision, CapabilityCheckRequest,
    },
};

pub struct AccessControlFacadeImpl {
    query_service: Arc<dyn AccessControlQueryService>,
}

impl AccessControlFacadeImpl {
    pub fn new(query_service: Arc<dyn AccessControlQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn check_capability(
        &self,
        request: CapabilityCheckRequest,
    ) -> Result<CapabilityCheckDecision, AccessControlDomainError> {
        let query = EvaluateCapabilityQuery::new(request.role, request.capability)?;
        let result = self.query_service.handle_evaluate_capability(query).await?;

        Ok(CapabilityCheckDecision {
            allowed: result.allowed,
            reason: result.reason,
        })
    }
}
