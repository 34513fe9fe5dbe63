use roster_business::UsersFetch;
use roster_states::StateCtx;

use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// The state context, for integration tests to inspect.
    pub fn ctx(&self) -> &StateCtx {
        &self.state.ctx
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished command results before anything renders.
        self.state.ctx.sync_states();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Roster");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(fetched_at) = self.state.ctx.state::<UsersFetch>().fetched_at {
                        ui.weak(format!("updated {}", fetched_at.format("%H:%M:%S")));
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        // Keep painting while a fetch is in flight so its completion shows up
        // without waiting for the next input event.
        if self.state.ctx.state::<UsersFetch>().is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
