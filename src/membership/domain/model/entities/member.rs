use chrono::{DateTime, Utc};

use crate::membership::domain::model::{
    enums::{member_status::MemberStatus, membership_domain_error::MembershipDomainError},
    value_objects::{member_id::MemberId, member_profile::MemberProfile, rut::Rut},
};

#[derive(Clone, Debug)]
pub struct Member {
    id: MemberId,
    profile: MemberProfile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    pub fn new_registered(profile: MemberProfile, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MemberId::new_random(),
            profile,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn restore(
        id: MemberId,
        profile: MemberProfile,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            profile,
            created_at,
            updated_at,
        }
    }

    pub fn update_profile(&mut self, profile: MemberProfile, updated_at: DateTime<Utc>) {
        self.profile = profile;
        self.updated_at = updated_at;
    }

    pub fn change_status(
        &mut self,
        status: MemberStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<(), MembershipDomainError> {
        if self.profile.status() == status {
            return Err(MembershipDomainError::InvalidStatusTransition);
        }
        self.profile.set_status(status);
        self.updated_at = updated_at;
        Ok(())
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn rut(&self) -> &Rut {
        self.profile.rut()
    }

    pub fn status(&self) -> MemberStatus {
        self.profile.status()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
