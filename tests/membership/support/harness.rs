use std::{sync::Arc, time::Duration};

use orpheo_api::{
    access_control::{build_access_control_facade, build_access_control_query_service},
    membership::{
        MEMBER_CACHE_NAMESPACE,
        application::{
            acl::access_control_facade_real_impl::AccessControlFacadeRealImpl,
            command_services::member_command_service_impl::MemberCommandServiceImpl,
            query_services::member_query_service_impl::MemberQueryServiceImpl,
        },
        domain::model::entities::member::Member,
        interfaces::rest::controllers::member_rest_controller::MembershipRestControllerState,
    },
    shared::infrastructure::storage::{
        in_memory_key_value_store::InMemoryKeyValueStore, key_value_store::KeyValueStore,
        ttl_cache::TtlCache,
    },
};

use super::fakes::FakeMemberRepository;

pub struct MembershipTestHarness {
    pub repository: Arc<FakeMemberRepository>,
    pub cache: Arc<TtlCache>,
    pub command_service: Arc<MemberCommandServiceImpl>,
    pub query_service: Arc<MemberQueryServiceImpl>,
}

pub fn create_harness(members: Vec<Member>) -> MembershipTestHarness {
    create_harness_with_store(members, Arc::new(InMemoryKeyValueStore::new()))
}

pub fn create_harness_with_store(
    members: Vec<Member>,
    store: Arc<dyn KeyValueStore>,
) -> MembershipTestHarness {
    let repository = Arc::new(FakeMemberRepository::with_members(members));
    let cache = Arc::new(TtlCache::new(
        store,
        MEMBER_CACHE_NAMESPACE,
        Duration::from_secs(60),
    ));

    let command_service = Arc::new(MemberCommandServiceImpl::new(
        repository.clone(),
        cache.clone(),
    ));
    let query_service = Arc::new(MemberQueryServiceImpl::new(
        repository.clone(),
        cache.clone(),
    ));

    MembershipTestHarness {
        repository,
        cache,
        command_service,
        query_service,
    }
}

/// Controller state wired to the real role policy.
pub fn create_endpoint_state(
    members: Vec<Member>,
) -> (MembershipRestControllerState, Arc<FakeMemberRepository>) {
    let harness = create_harness(members);
    let access_control_facade =
        build_access_control_facade(build_access_control_query_service());

    let state = MembershipRestControllerState {
        command_service: harness.command_service,
        query_service: harness.query_service,
        access_control_facade: Arc::new(AccessControlFacadeRealImpl::new(access_control_facade)),
    };

    (state, harness.repository)
}
