use std::sync::Arc;

use axum::Router;

use crate::access_control::{
    application::{
        acl::access_control_facade_impl::AccessControlFacadeImpl,
        query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
    },
    domain::services::access_control_query_service::AccessControlQueryService,
    interfaces::{
        acl::access_control_facade::AccessControlFacade,
        rest::controllers::access_control_rest_controller::{
            AccessControlRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_access_control_query_service() -> Arc<dyn AccessControlQueryService> {
    Arc::new(AccessControlQueryServiceImpl::new())
}

pub fn build_access_control_facade(
    query_service: Arc<dyn AccessControlQueryService>,
) -> Arc<dyn AccessControlFacade> {
    Arc::new(AccessControlFacadeImpl::new(query_service))
}

pub fn build_access_control_router(query_service: Arc<dyn AccessControlQueryService>) -> Router {
    router(AccessControlRestControllerState { query_service })
}
