//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::UserRow;

use super::cells::{count_cell, text_cell};

/// Renders one user row. Cell order matches the header:
/// name, email, phone, address, city, certification count, certificate list,
/// first profession.
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRow) {
    row.col(|ui| text_cell(ui, &user.name));
    row.col(|ui| text_cell(ui, &user.email));
    row.col(|ui| text_cell(ui, &user.phone));
    row.col(|ui| text_cell(ui, user.local_address()));
    row.col(|ui| text_cell(ui, user.city()));
    row.col(|ui| count_cell(ui, user.certification_count()));
    row.col(|ui| text_cell(ui, &user.certificate_names()));
    row.col(|ui| text_cell(ui, user.primary_profession().unwrap_or("")));
}
