use async_trait::async_trait;

use crate::membership::domain::model::{
    entities::member::Member,
    enums::{
        member_grade::MemberGrade, member_status::MemberStatus,
        membership_domain_error::MembershipDomainError,
    },
    value_objects::{member_id::MemberId, rut::Rut},
};

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn save(&self, member: &Member) -> Result<(), MembershipDomainError>;

    async fn find_by_id(&self, member_id: &MemberId)
    -> Result<Option<Member>, MembershipDomainError>;

    async fn find_by_rut(&self, rut: &Rut) -> Result<Option<Member>, MembershipDomainError>;

    /// Members ordered by surnames then names, optionally filtered.
    async fn list(
        &self,
        grade: Option<MemberGrade>,
        status: Option<MemberStatus>,
    ) -> Result<Vec<Member>, MembershipDomainError>;

    /// `false` when no member had that id.
    async fn delete(&self, member_id: &MemberId) -> Result<bool, MembershipDomainError>;
}
