//! Cell rendering helpers for the users table.

use egui::{Label, RichText, Ui};

/// Plain text cell, truncated to the column width.
#[inline]
pub fn text_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(text).truncate());
}

/// Numeric cell (certification count), monospace.
#[inline]
pub fn count_cell(ui: &mut Ui, count: usize) {
    ui.label(RichText::new(count.to_string()).monospace());
}
