use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade as AccessControlBcFacade,
    config::app_config::AppConfig,
    membership::{
        application::{
            acl::{
                access_control_facade_allow_all_impl::AccessControlFacadeAllowAllImpl,
                access_control_facade_real_impl::AccessControlFacadeRealImpl,
            },
            command_services::member_command_service_impl::MemberCommandServiceImpl,
            query_services::member_query_service_impl::MemberQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_member_repository_impl::SqlxMemberRepositoryImpl,
        interfaces::{
            acl::access_control_facade::AccessControlFacade,
            rest::controllers::member_rest_controller::{MembershipRestControllerState, router},
        },
    },
    shared::infrastructure::storage::{
        key_value_store::KeyValueStore, ttl_cache::TtlCache,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub const MEMBER_CACHE_NAMESPACE: &str = "members";

pub async fn build_membership_router(
    config: &AppConfig,
    key_value_store: Arc<dyn KeyValueStore>,
    access_control_facade: Arc<dyn AccessControlBcFacade>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let member_repository = Arc::new(SqlxMemberRepositoryImpl::new(pool));
    let member_cache = Arc::new(TtlCache::new(
        key_value_store,
        MEMBER_CACHE_NAMESPACE,
        config.member_cache_ttl(),
    ));

    let command_service = Arc::new(MemberCommandServiceImpl::new(
        member_repository.clone(),
        member_cache.clone(),
    ));
    let query_service = Arc::new(MemberQueryServiceImpl::new(member_repository, member_cache));

    let access_control_facade: Arc<dyn AccessControlFacade> = if config.authorization_enabled {
        Arc::new(AccessControlFacadeRealImpl::new(access_control_facade))
    } else {
        tracing::warn!("authorization disabled; every role may manage members");
        Arc::new(AccessControlFacadeAllowAllImpl::new())
    };

    Ok(router(MembershipRestControllerState {
        command_service,
        query_service,
        access_control_facade,
    }))
}
