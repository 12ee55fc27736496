use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    membership::{
        domain::{
            model::{
                entities::member::Member,
                enums::membership_domain_error::MembershipDomainError,
                queries::{
                    find_member_by_rut_query::FindMemberByRutQuery,
                    get_member_query::GetMemberQuery, list_members_query::ListMembersQuery,
                },
            },
            services::member_query_service::MemberQueryService,
        },
        infrastructure::{
            cache::member_cache_entry::CachedMember,
            persistence::repositories::member_repository::MemberRepository,
        },
    },
    shared::infrastructure::storage::ttl_cache::TtlCache,
};

pub struct MemberQueryServiceImpl {
    member_repository: Arc<dyn MemberRepository>,
    member_cache: Arc<TtlCache>,
}

impl MemberQueryServiceImpl {
    pub fn new(member_repository: Arc<dyn MemberRepository>, member_cache: Arc<TtlCache>) -> Self {
        Self {
            member_repository,
            member_cache,
        }
    }

    async fn cached(&self, key: &str) -> Option<CachedMember> {
        match self.member_cache.get::<CachedMember>(key).await {
            Ok(entry) => entry,
            Err(error) => {
                warn!(key, %error, "member cache read failed");
                None
            }
        }
    }

    /// Read-through write. Skipped when a concurrent mutation already cached
    /// a newer version or a deletion.
    async fn store(&self, key: &str, member: &Member) {
        if self
            .cached(key)
            .await
            .is_some_and(|current| current.supersedes(member))
        {
            debug!(member_id = %key, "cached member is newer; read-through skipped");
            return;
        }

        if let Err(error) = self.member_cache.set(key, &CachedMember::from(member)).await {
            warn!(member_id = %key, %error, "member cache write failed");
        }
    }
}

#[async_trait]
impl MemberQueryService for MemberQueryServiceImpl {
    async fn handle_get(&self, query: GetMemberQuery) -> Result<Member, MembershipDomainError> {
        let key = query.member_id().as_string();
        match self.cached(&key).await {
            Some(CachedMember::Present(entry)) => match entry.into_member() {
                Ok(member) => {
                    debug!(member_id = %key, "member cache hit");
                    return Ok(member);
                }
                Err(error) => {
                    warn!(member_id = %key, %error, "discarding unreadable cached member");
                }
            },
            Some(CachedMember::Deleted) => return Err(MembershipDomainError::MemberNotFound),
            None => {}
        }

        let member = self
            .member_repository
            .find_by_id(query.member_id())
            .await?
            .ok_or(MembershipDomainError::MemberNotFound)?;

        self.store(&key, &member).await;
        Ok(member)
    }

    async fn handle_find_by_rut(
        &self,
        query: FindMemberByRutQuery,
    ) -> Result<Member, MembershipDomainError> {
        self.member_repository
            .find_by_rut(query.rut())
            .await?
            .ok_or(MembershipDomainError::MemberNotFound)
    }

    async fn handle_list(
        &self,
        query: ListMembersQuery,
    ) -> Result<Vec<Member>, MembershipDomainError> {
        self.member_repository
            .list(query.grade(), query.status())
            .await
    }
}
