use std::str::FromStr;

use crate::membership::domain::model::{
    enums::{member_status::MemberStatus, membership_domain_error::MembershipDomainError},
    value_objects::member_id::MemberId,
};

#[derive(Clone, Debug)]
pub struct ChangeMemberStatusCommand {
    member_id: MemberId,
    status: MemberStatus,
}

impl ChangeMemberStatusCommand {
    pub fn new(member_id: String, status: String) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            member_id: MemberId::new(member_id)?,
            status: MemberStatus::from_str(&status)?,
        })
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }
}
