pub mod member_field;
pub mod member_grade;
pub mod member_status;
pub mod membership_domain_error;
