pub mod member_command_service_impl;
