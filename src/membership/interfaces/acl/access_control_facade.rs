use async_trait::async_trait;

use crate::membership::domain::model::enums::membership_domain_error::MembershipDomainError;

pub const MEMBERS_READ: &str = "members:read";
pub const MEMBERS_WRITE: &str = "members:write";
pub const MEMBERS_DELETE: &str = "members:delete";

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// `Ok(())` when `role` holds `capability`; `AccessDenied` otherwise.
    async fn ensure_capability(&self, role: &str, capability: &str)
    -> Result<(), MembershipDomainError>;
}
