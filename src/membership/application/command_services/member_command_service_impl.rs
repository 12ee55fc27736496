use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    membership::{
        domain::{
            model::{
                commands::{
                    change_member_status_command::ChangeMemberStatusCommand,
                    delete_member_command::DeleteMemberCommand,
                    register_member_command::RegisterMemberCommand,
                    update_member_command::UpdateMemberCommand,
                },
                entities::member::Member,
                enums::membership_domain_error::MembershipDomainError,
                value_objects::member_id::MemberId,
            },
            services::member_command_service::MemberCommandService,
        },
        infrastructure::{
            cache::member_cache_entry::CachedMember,
            persistence::repositories::member_repository::MemberRepository,
        },
    },
    shared::infrastructure::storage::ttl_cache::TtlCache,
};

pub struct MemberCommandServiceImpl {
    member_repository: Arc<dyn MemberRepository>,
    member_cache: Arc<TtlCache>,
}

impl MemberCommandServiceImpl {
    pub fn new(member_repository: Arc<dyn MemberRepository>, member_cache: Arc<TtlCache>) -> Self {
        Self {
            member_repository,
            member_cache,
        }
    }

    async fn find_existing(&self, member_id: &MemberId) -> Result<Member, MembershipDomainError> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .ok_or(MembershipDomainError::MemberNotFound)
    }

    async fn refresh(&self, member: &Member) {
        self.write_cache(member.id(), &CachedMember::from(member)).await;
    }

    async fn mark_deleted(&self, member_id: &MemberId) {
        self.write_cache(member_id, &CachedMember::Deleted).await;
    }

    /// Falls back to removing the key when the write fails.
    async fn write_cache(&self, member_id: &MemberId, entry: &CachedMember) {
        if let Err(error) = self.member_cache.set(&member_id.as_string(), entry).await {
            warn!(member_id = %member_id.value(), %error, "failed to write cached member");
            self.invalidate(member_id).await;
        }
    }

    async fn invalidate(&self, member_id: &MemberId) {
        if let Err(error) = self.member_cache.remove(&member_id.as_string()).await {
            warn!(member_id = %member_id.value(), %error, "failed to invalidate cached member");
        }
    }
}

#[async_trait]
impl MemberCommandService for MemberCommandServiceImpl {
    async fn handle_register(
        &self,
        command: RegisterMemberCommand,
    ) -> Result<Member, MembershipDomainError> {
        if self
            .member_repository
            .find_by_rut(command.profile().rut())
            .await?
            .is_some()
        {
            warn!(rut = %command.profile().rut().formatted(), "rut already registered");
            return Err(MembershipDomainError::MemberAlreadyRegistered);
        }

        let member = Member::new_registered(command.into_profile(), Utc::now());
        self.member_repository.save(&member).await?;

        info!(
            member_id = %member.id().value(),
            grade = member.profile().grade().as_str(),
            "member registered"
        );
        Ok(member)
    }

    async fn handle_update(
        &self,
        command: UpdateMemberCommand,
    ) -> Result<Member, MembershipDomainError> {
        let mut member = self.find_existing(command.member_id()).await?;

        if let Some(holder) = self
            .member_repository
            .find_by_rut(command.profile().rut())
            .await?
        {
            if holder.id() != member.id() {
                warn!(member_id = %member.id().value(), "rut belongs to another member");
                return Err(MembershipDomainError::MemberAlreadyRegistered);
            }
        }

        member.update_profile(command.profile().clone(), Utc::now());
        self.member_repository.save(&member).await?;
        self.refresh(&member).await;

        info!(member_id = %member.id().value(), "member updated");
        Ok(member)
    }

    async fn handle_change_status(
        &self,
        command: ChangeMemberStatusCommand,
    ) -> Result<Member, MembershipDomainError> {
        let mut member = self.find_existing(command.member_id()).await?;
        let previous = member.status();

        member.change_status(command.status(), Utc::now())?;
        self.member_repository.save(&member).await?;
        self.refresh(&member).await;

        info!(
            member_id = %member.id().value(),
            from = previous.as_str(),
            to = member.status().as_str(),
            "member status changed"
        );
        Ok(member)
    }

    async fn handle_delete(
        &self,
        command: DeleteMemberCommand,
    ) -> Result<(), MembershipDomainError> {
        if !self.member_repository.delete(command.member_id()).await? {
            return Err(MembershipDomainError::MemberNotFound);
        }
        self.mark_deleted(command.member_id()).await;

        info!(member_id = %command.member_id().value(), "member deleted");
        Ok(())
    }
}
