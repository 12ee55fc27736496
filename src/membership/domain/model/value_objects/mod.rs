pub mod member_id;
pub mod member_profile;
pub mod rut;
