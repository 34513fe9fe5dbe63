//! Main panel for the users table.
//!
//! The panel is "dumb" on purpose: it reads `QueryState`/`UsersFetch`, renders,
//! and funnels every interaction through a query mutation followed by exactly
//! one `FetchUsersCommand` dispatch. It never sorts or filters rows locally —
//! the server's ordering is the only ordering.

use egui::{Color32, Response, TextEdit, Ui};
use roster_business::{FetchUsersCommand, QueryState, SortColumn, UsersFetch};
use roster_states::StateCtx;

use super::pagination::{self, PageAction};
use super::table;

/// Displays the users panel. Dispatches a fetch when any interaction changed
/// the query.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut needs_fetch = false;

    let response = ui.vertical(|ui| {
        // Filter box. Every edit resets the page and refetches; overlapping
        // requests are resolved by the dispatch layer (latest wins).
        let mut filter = state_ctx.state::<QueryState>().filter_text.clone();
        let filter_response = ui.add(
            TextEdit::singleline(&mut filter)
                .hint_text("Filter")
                .desired_width(f32::INFINITY),
        );
        if filter_response.changed() {
            state_ctx.state_mut::<QueryState>().set_filter_text(filter);
            needs_fetch = true;
        }

        ui.add_space(8.0);

        let fetch = state_ctx.state::<UsersFetch>().clone();
        let query = state_ctx.state::<QueryState>().clone();

        ui.horizontal(|ui| {
            if fetch.is_loading() {
                ui.spinner();
                ui.label("Loading...");
            }
            // A failed fetch shows a banner; the previous rows stay below it.
            if let Some(error) = fetch.error_message() {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            }
        });

        let mut sort_clicked: Option<SortColumn> = None;
        table::users_table(ui, &query, &fetch, &mut sort_clicked);
        if let Some(column) = sort_clicked {
            state_ctx.state_mut::<QueryState>().toggle_sort(column);
            needs_fetch = true;
        }

        // Genuinely empty result, distinct from the error banner above.
        if fetch.is_empty_success() {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.weak("No records available");
            });
        }

        ui.add_space(8.0);

        if let Some(action) = pagination::pagination_bar(ui, &query, fetch.total_count()) {
            let query_state = state_ctx.state_mut::<QueryState>();
            match action {
                PageAction::Page(page) => query_state.set_page(page),
                PageAction::PageSize(size) => query_state.set_page_size(size),
            }
            needs_fetch = true;
        }
    });

    if needs_fetch {
        state_ctx.dispatch::<FetchUsersCommand>();
    }

    response.response
}
