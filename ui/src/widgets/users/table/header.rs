//! Sortable header row for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{QueryState, SortColumn};

/// Non-sortable trailing columns.
const PLAIN_HEADERS: [&str; 2] = ["Certificates", "Profession"];

/// Renders the header: one clickable cell per sortable column (with an
/// up/down marker on the active one), then the plain labels.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    query: &QueryState,
    clicked: &mut Option<SortColumn>,
) {
    for column in SortColumn::ALL {
        header.col(|ui| {
            if sortable_header_cell(ui, query, column) {
                *clicked = Some(column);
            }
        });
    }
    for label in PLAIN_HEADERS {
        header.col(|ui| {
            ui.strong(label);
        });
    }
}

/// A frameless button header cell. Returns true when clicked.
fn sortable_header_cell(ui: &mut Ui, query: &QueryState, column: SortColumn) -> bool {
    let marker = if query.sort_column == Some(column) {
        if query.sort_order.is_asc() { " ^" } else { " v" }
    } else {
        ""
    };

    let text = RichText::new(format!("{}{marker}", column.label())).strong();
    ui.add(Button::new(text).frame(false)).clicked()
}
