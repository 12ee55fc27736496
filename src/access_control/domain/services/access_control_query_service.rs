use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, capability::Capability},
    queries::{
        evaluate_capability_query::EvaluateCapabilityQuery,
        role_permissions_query::RolePermissionsQuery,
    },
};

#[derive(Clone, Debug)]
pub struct CapabilityDecisionResult {
    pub allowed: bool,
    pub reason: String,
}

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_role_permissions(
        &self,
        query: RolePermissionsQuery,
    ) -> Result<BTreeSet<Capability>, AccessControlDomainError>;

    async fn handle_evaluate_capability(
        &self,
        query: EvaluateCapabilityQuery,
    ) -> Result<CapabilityDecisionResult, AccessControlDomainError>;
}
