use async_trait::async_trait;

use crate::membership::domain::model::{
    entities::member::Member,
    enums::membership_domain_error::MembershipDomainError,
    queries::{
        find_member_by_rut_query::FindMemberByRutQuery, get_member_query::GetMemberQuery,
        list_members_query::ListMembersQuery,
    },
};

#[async_trait]
pub trait MemberQueryService: Send + Sync {
    async fn handle_get(&self, query: GetMemberQuery) -> Result<Member, MembershipDomainError>;

    async fn handle_find_by_rut(
        &self,
        query: FindMemberByRutQuery,
    ) -> Result<Member, MembershipDomainError>;

    async fn handle_list(
        &self,
        query: ListMembersQuery,
    ) -> Result<Vec<Member>, MembershipDomainError>;
}
