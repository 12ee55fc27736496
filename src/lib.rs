pub mod access_control;
pub mod config;
pub mod membership;
pub mod shared;
