pub mod access_control_domain_error;
pub mod capability;
pub mod member_role;
