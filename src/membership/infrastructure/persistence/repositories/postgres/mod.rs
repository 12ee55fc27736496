pub mod sqlx_member_repository_impl;
