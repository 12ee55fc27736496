pub mod change_member_status_request_resource;
pub mod list_members_query_resource;
pub mod member_form_resource;
pub mod member_resource;
pub mod member_validation_resource;
pub mod membership_error_response_resource;
