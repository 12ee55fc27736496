pub mod change_member_status_command;
pub mod delete_member_command;
pub mod register_member_command;
pub mod update_member_command;
