mod add_members_dialog;
pub mod detail;
pub mod list;
mod user_row;
