use async_trait::async_trait;

use crate::membership::domain::model::{
    commands::{
        change_member_status_command::ChangeMemberStatusCommand,
        delete_member_command::DeleteMemberCommand,
        register_member_command::RegisterMemberCommand,
        update_member_command::UpdateMemberCommand,
    },
    entities::member::Member,
    enums::membership_domain_error::MembershipDomainError,
};

#[async_trait]
pub trait MemberCommandService: Send + Sync {
    async fn handle_register(
        &self,
        command: RegisterMemberCommand,
    ) -> Result<Member, MembershipDomainError>;

    async fn handle_update(
        &self,
        command: UpdateMemberCommand,
    ) -> Result<Member, MembershipDomainError>;

    async fn handle_change_status(
        &self,
        command: ChangeMemberStatusCommand,
    ) -> Result<Member, MembershipDomainError>;

    async fn handle_delete(&self, command: DeleteMemberCommand)
    -> Result<(), MembershipDomainError>;
}
