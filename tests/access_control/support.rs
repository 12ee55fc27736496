#[path = "support/harness.rs"]
mod harness;

pub use harness::{create_controller_state, create_facade, create_query_service};
