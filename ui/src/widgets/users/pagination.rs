//! Pagination bar: previous/next, page position, rows-per-page selector.

use egui::{ComboBox, Ui};
use roster_business::QueryState;

/// Selectable row densities.
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];

/// What the user asked for, applied by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Page(u32),
    PageSize(u32),
}

/// Renders the bar; returns the requested change, if any.
///
/// "Page X of N" derives N from the server-reported total count, never from
/// the length of the page currently held. Next is deliberately not clamped: a
/// page past the end is a valid request that comes back empty.
pub fn pagination_bar(ui: &mut Ui, query: &QueryState, total_count: u64) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(query.page > 0, egui::Button::new("< Prev"))
            .clicked()
        {
            action = Some(PageAction::Page(query.page - 1));
        }

        let total_pages = query.total_pages(total_count).max(1);
        ui.label(format!("Page {} of {total_pages}", u64::from(query.page) + 1));

        if ui.button("Next >").clicked() {
            action = Some(PageAction::Page(query.page + 1));
        }

        ui.separator();

        ui.label("Rows per page:");
        let mut page_size = query.page_size;
        ComboBox::from_id_salt("page_size")
            .selected_text(page_size.to_string())
            .show_ui(ui, |ui| {
                for size in PAGE_SIZES {
                    ui.selectable_value(&mut page_size, size, size.to_string());
                }
            });
        if page_size != query.page_size {
            action = Some(PageAction::PageSize(page_size));
        }

        ui.separator();
        ui.weak(format!("{total_count} total"));
    });

    action
}
