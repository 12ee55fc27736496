use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::membership::domain::model::{
    entities::member::Member,
    enums::membership_domain_error::MembershipDomainError,
    validation::member_record::MemberRecord,
    value_objects::{member_id::MemberId, member_profile::MemberProfile},
};

/// Serialized shape of a member kept in the TTL cache.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberCacheEntry {
    pub id: Uuid,
    pub record: MemberRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberCacheEntry {
    pub fn into_member(self) -> Result<Member, MembershipDomainError> {
        Ok(Member::restore(
            MemberId::from_uuid(self.id),
            MemberProfile::from_sanitized(self.record)?,
            self.created_at,
            self.updated_at,
        ))
    }
}

impl From<&Member> for MemberCacheEntry {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().value(),
            record: member.profile().to_record(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}

/// What the member cache holds for an id. Ids are never reused, so a
/// `Deleted` marker stays true until it expires.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CachedMember {
    Present(MemberCacheEntry),
    Deleted,
}

impl CachedMember {
    /// `true` when this entry is at least as recent as `member`, so writing
    /// `member` over it would go backwards.
    pub fn supersedes(&self, member: &Member) -> bool {
        match self {
            Self::Present(entry) => entry.updated_at >= member.updated_at(),
            Self::Deleted => true,
        }
    }
}

impl From<&Member> for CachedMember {
    fn from(member: &Member) -> Self {
        Self::Present(MemberCacheEntry::from(member))
    }
}
