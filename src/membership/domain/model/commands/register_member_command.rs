use chrono::NaiveDate;

use crate::membership::domain::model::{
    enums::membership_domain_error::MembershipDomainError,
    validation::{
        member_form_errors::MemberFormOutcome, member_form_validator, member_record::MemberRecord,
    },
    value_objects::member_profile::MemberProfile,
};

#[derive(Clone, Debug)]
pub struct RegisterMemberCommand {
    profile: MemberProfile,
}

impl RegisterMemberCommand {
    pub fn new(record: MemberRecord) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            profile: validated_profile(member_form_validator::validate_and_sanitize(&record))?,
        })
    }

    pub fn new_at(record: MemberRecord, today: NaiveDate) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            profile: validated_profile(member_form_validator::validate_and_sanitize_at(
                &record, today,
            ))?,
        })
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn into_profile(self) -> MemberProfile {
        self.profile
    }
}

/// Profile from a clean validation pass; the field errors otherwise.
pub(crate) fn validated_profile(
    outcome: MemberFormOutcome,
) -> Result<MemberProfile, MembershipDomainError> {
    match outcome.sanitized {
        Some(sanitized) if outcome.valid => MemberProfile::from_sanitized(sanitized),
        _ => Err(MembershipDomainError::InvalidMemberForm(outcome.errors)),
    }
}
