pub mod access_control_error_response_resource;
pub mod evaluate_capability_request_resource;
pub mod role_permissions_resource;
