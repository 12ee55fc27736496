pub mod commands;
pub mod entities;
pub mod enums;
pub mod queries;
pub mod validation;
pub mod value_objects;
