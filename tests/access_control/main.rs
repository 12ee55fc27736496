mod support;

mod endpoint_tests;
mod role_permission_policy_tests;
