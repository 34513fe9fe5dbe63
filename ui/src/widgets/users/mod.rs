//! The users table widget: filter box, sortable table, pagination bar.

mod pagination;
mod panel;
mod table;

pub use panel::users_panel;
