pub mod find_member_by_rut_query;
pub mod get_member_query;
pub mod list_members_query;
