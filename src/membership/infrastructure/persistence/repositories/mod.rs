pub mod member_repository;
pub mod postgres;
