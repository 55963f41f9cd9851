mod delete_confirm_dialog;
mod header;
mod status_bar;
mod team_list;

pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use header::Header;
pub use status_bar::StatusBar;
pub use team_list::TeamList;
