pub mod member_command_service;
pub mod member_query_service;
