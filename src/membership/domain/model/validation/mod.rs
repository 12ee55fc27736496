pub mod field_validators;
pub mod member_form_errors;
pub mod member_form_validator;
pub mod member_record;
