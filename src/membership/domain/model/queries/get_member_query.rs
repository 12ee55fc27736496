use crate::membership::domain::model::{
    enums::membership_domain_error::MembershipDomainError, value_objects::member_id::MemberId,
};

#[derive(Clone, Debug)]
pub struct GetMemberQuery {
    member_id: MemberId,
}

impl GetMemberQuery {
    pub fn new(member_id: String) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            member_id: MemberId::new(member_id)?,
        })
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }
}
