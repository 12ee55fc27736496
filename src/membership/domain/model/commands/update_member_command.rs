use chrono::NaiveDate;

use crate::membership::domain::model::{
    commands::register_member_command::validated_profile,
    enums::membership_domain_error::MembershipDomainError,
    validation::{member_form_validator, member_record::MemberRecord},
    value_objects::{member_id::MemberId, member_profile::MemberProfile},
};

#[derive(Clone, Debug)]
pub struct UpdateMemberCommand {
    member_id: MemberId,
    profile: MemberProfile,
}

impl UpdateMemberCommand {
    pub fn new(member_id: String, record: MemberRecord) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            member_id: MemberId::new(member_id)?,
            profile: validated_profile(member_form_validator::validate_and_sanitize(&record))?,
        })
    }

    pub fn new_at(
        member_id: String,
        record: MemberRecord,
        today: NaiveDate,
    ) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            member_id: MemberId::new(member_id)?,
            profile: validated_profile(member_form_validator::validate_and_sanitize_at(
                &record, today,
            ))?,
        })
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }
}
