use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::debug;

use crate::access_control::domain::{
    model::{
        enums::{access_control_domain_error::AccessControlDomainError, capability::Capability},
        policies::role_permission_policy::{
            WILDCARD, granted_entries, has_capability, permissions_for,
        },
        queries::{
            evaluate_capability_query::EvaluateCapabilityQuery,
            role_permissions_query::RolePermissionsQuery,
        },
    },
    services::access_control_query_service::{
        AccessControlQueryService, CapabilityDecisionResult,
    },
};

#[derive(Default)]
pub struct AccessControlQueryServiceImpl;

impl AccessControlQueryServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_role_permissions(
        &self,
        query: RolePermissionsQuery,
    ) -> Result<BTreeSet<Capability>, AccessControlDomainError> {
        Ok(permissions_for(query.role()))
    }

    async fn handle_evaluate_capability(
        &self,
        query: EvaluateCapabilityQuery,
    ) -> Result<CapabilityDecisionResult, AccessControlDomainError> {
        let role = query.role();
        let capability = query.capability();
        let allowed = has_capability(role, capability);

        let reason = if !allowed {
            format!("role {} lacks {}", role.as_str(), capability.as_str())
        } else if granted_entries(role).contains(&WILDCARD) {
            format!("role {} holds the wildcard grant", role.as_str())
        } else {
            format!("role {} is granted {}", role.as_str(), capability.as_str())
        };

        debug!(
            role = role.as_str(),
            capability = capability.as_str(),
            allowed,
            "capability evaluated"
        );

        Ok(CapabilityDecisionResult { allowed, reason })
    }
}
