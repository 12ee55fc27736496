pub mod enums;
pub mod policies;
pub mod queries;
