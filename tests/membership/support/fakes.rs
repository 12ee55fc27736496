use std::sync::Mutex;

use async_trait::async_trait;
use orpheo_api::{
    membership::{
        domain::model::{
            entities::member::Member,
            enums::{
                member_grade::MemberGrade, member_status::MemberStatus,
                membership_domain_error::MembershipDomainError,
            },
            value_objects::{member_id::MemberId, rut::Rut},
        },
        infrastructure::persistence::repositories::member_repository::MemberRepository,
    },
    shared::infrastructure::storage::{key_value_store::KeyValueStore, storage_error::StorageError},
};

#[derive(Default)]
struct FakeMemberRepositoryState {
    members: Vec<Member>,
    save_calls: usize,
    find_by_id_calls: usize,
    delete_calls: usize,
}

pub struct FakeMemberRepository {
    state: Mutex<FakeMemberRepositoryState>,
}

impl FakeMemberRepository {
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            state: Mutex::new(FakeMemberRepositoryState {
                members,
                ..Default::default()
            }),
        }
    }

    pub fn save_calls(&self) -> usize {
        self.state.lock().expect("lock").save_calls
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.state.lock().expect("lock").find_by_id_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.state.lock().expect("lock").delete_calls
    }

    pub fn stored(&self) -> Vec<Member> {
        self.state.lock().expect("lock").members.clone()
    }
}

#[async_trait]
impl MemberRepository for FakeMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), MembershipDomainError> {
        let mut state = self.state.lock().expect("lock");
        state.save_calls += 1;
        match state.members.iter_mut().find(|m| m.id() == member.id()) {
            Some(existing) => *existing = member.clone(),
            None => state.members.push(member.clone()),
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Member>, MembershipDomainError> {
        let mut state = self.state.lock().expect("lock");
        state.find_by_id_calls += 1;
        Ok(state.members.iter().find(|m| m.id() == member_id).cloned())
    }

    async fn find_by_rut(&self, rut: &Rut) -> Result<Option<Member>, MembershipDomainError> {
        let state = self.state.lock().expect("lock");
        Ok(state.members.iter().find(|m| m.rut() == rut).cloned())
    }

    async fn list(
        &self,
        grade: Option<MemberGrade>,
        status: Option<MemberStatus>,
    ) -> Result<Vec<Member>, MembershipDomainError> {
        let state = self.state.lock().expect("lock");
        let mut members: Vec<Member> = state
            .members
            .iter()
            .filter(|m| grade.is_none_or(|g| m.profile().grade() == g))
            .filter(|m| status.is_none_or(|s| m.status() == s))
            .cloned()
            .collect();
        members.sort_by(|a, b| {
            (a.profile().last_names(), a.profile().first_names())
                .cmp(&(b.profile().last_names(), b.profile().first_names()))
        });
        Ok(members)
    }

    async fn delete(&self, member_id: &MemberId) -> Result<bool, MembershipDomainError> {
        let mut state = self.state.lock().expect("lock");
        state.delete_calls += 1;
        let before = state.members.len();
        state.members.retain(|m| m.id() != member_id);
        Ok(state.members.len() < before)
    }
}

/// Store whose every operation fails, for checking that cache faults never
/// surface to callers.
pub struct FailingKeyValueStore;

#[async_trait]
impl KeyValueStore for FailingKeyValueStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Backend("store offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("store offline".to_string()))
    }
}
