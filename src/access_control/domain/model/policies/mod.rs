pub mod role_permission_policy;
