use eframe::egui::{self, ScrollArea};

use crate::state::{AppState, SharedCache};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClusterViewerApp {
    pub state: AppState,
}

impl ClusterViewerApp {
    pub fn new(cache: SharedCache) -> Self {
        Self {
            state: AppState::new(cache),
        }
    }
}

impl eframe::App for ClusterViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the results page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui);
                    ui.add_space(12.0);

                    ui.heading("Quantitative Results");
                    panels::metrics_table(ui);
                    ui.add_space(8.0);
                    plot::metric_charts(ui);
                    ui.add_space(12.0);

                    if let Err(e) = &self.state.results {
                        panels::load_error(ui, e);
                        return;
                    }

                    panels::keyword_section(ui, &self.state);
                    ui.add_space(12.0);
                    panels::papers_section(ui, &mut self.state);
                    ui.add_space(12.0);
                    plot::embedding_visualization(ui, &self.state);
                    ui.add_space(12.0);
                    panels::export_button(ui, &mut self.state);

                    panels::footer(ui);
                });
        });
    }
}
