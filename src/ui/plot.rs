use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::cluster_palette;
use crate::data::metrics::{Metric, RESULT_METRICS};
use crate::state::AppState;

pub const VISUALIZATION_CAPTION: &str =
    "UMAP Visualization of Combined SBERT + GCN Embeddings";
const VISUALIZATION_URI: &str = "bytes://umap_combined_clusters.png";

// ---------------------------------------------------------------------------
// Metric comparison charts
// ---------------------------------------------------------------------------

/// One bar chart per metric, a bar per method.
pub fn metric_charts(ui: &mut Ui) {
    let colors = cluster_palette(RESULT_METRICS.len());

    ui.columns(Metric::ALL.len(), |columns| {
        for (ui, metric) in columns.iter_mut().zip(Metric::ALL) {
            ui.label(RichText::new(metric.label()).strong());
            Plot::new(("metric_chart", metric.label()))
                .height(160.0)
                .legend(Legend::default())
                .show_axes([false, true])
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    for (i, (record, color)) in RESULT_METRICS.iter().zip(&colors).enumerate() {
                        let bar = Bar::new(i as f64, metric.value(record)).width(0.7);
                        let chart = BarChart::new(vec![bar]).name(record.method).color(*color);
                        plot_ui.bar_chart(chart);
                    }
                });
        }
    });
}

// ---------------------------------------------------------------------------
// Pre-rendered embedding image
// ---------------------------------------------------------------------------

pub fn embedding_visualization(ui: &mut Ui, state: &AppState) {
    ui.heading("Embedding Visualization");

    match state.visualization() {
        Ok(bytes) => {
            ui.add(
                egui::Image::from_bytes(VISUALIZATION_URI, bytes)
                    .max_width(ui.available_width().min(900.0))
                    .maintain_aspect_ratio(true),
            );
            ui.label(RichText::new(VISUALIZATION_CAPTION).small().weak());
        }
        Err(e) => {
            ui.label(RichText::new(format!("Visualization unavailable: {e}")).color(Color32::RED));
        }
    }
}
