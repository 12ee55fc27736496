#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{registered_member, today, valid_record};
pub use harness::{create_endpoint_state, create_harness, create_harness_with_store};
