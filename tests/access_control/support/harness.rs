use std::sync::Arc;

use orpheo_api::access_control::{
    build_access_control_facade, build_access_control_query_service,
    domain::services::access_control_query_service::AccessControlQueryService,
    interfaces::{
        acl::access_control_facade::AccessControlFacade,
        rest::controllers::access_control_rest_controller::AccessControlRestControllerState,
    },
};

pub fn create_query_service() -> Arc<dyn AccessControlQueryService> {
    build_access_control_query_service()
}

pub fn create_facade() -> Arc<dyn AccessControlFacade> {
    build_access_control_facade(create_query_service())
}

pub fn create_controller_state() -> AccessControlRestControllerState {
    AccessControlRestControllerState {
        query_service: create_query_service(),
    }
}
