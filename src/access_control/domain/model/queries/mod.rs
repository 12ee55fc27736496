pub mod evaluate_capability_query;
pub mod role_permissions_query;
