mod modals;
mod pagination;
mod panel;
mod table;

pub use modals::{delete_confirmation_modal, edit_user_modal};
pub use pagination::page_bar;
pub use panel::user_table_panel;
pub use table::{COLUMNS, users_table};
