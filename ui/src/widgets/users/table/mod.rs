//! Table rendering, split into focused pieces:
//! - `columns`: column definitions and widths
//! - `header`: sortable header row
//! - `row`: one user row
//! - `cells`: cell rendering helpers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::{QueryState, SortColumn, UsersFetch};

/// Renders the users table. A click on a sortable header lands in
/// `sort_clicked` for the panel to apply.
pub fn users_table(
    ui: &mut Ui,
    query: &QueryState,
    fetch: &UsersFetch,
    sort_clicked: &mut Option<SortColumn>,
) {
    let mut builder = TableBuilder::new(ui).striped(true);
    for column in columns::table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header_row| {
            header::render_table_header(&mut header_row, query, sort_clicked);
        })
        .body(|mut body| {
            for user in fetch.rows() {
                body.row(columns::ROW_HEIGHT, |mut table_row| {
                    row::render_user_row(&mut table_row, user);
                });
            }
        });
}
