use eframe::egui::{self, Color32, ComboBox, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::cache::DataError;
use crate::data::export::EXPORT_FILE_NAME;
use crate::data::filter::keyword_summaries;
use crate::data::metrics::{Metric, RESULT_METRICS};
use crate::data::model::ClusterId;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Static page content
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(
        RichText::new("Enhancing Topic Coherence and Discovery in NLP Literature").size(26.0),
    );
    ui.label(
        "This application presents precomputed results from a research project \
         combining semantic (Sentence-BERT) and structural (GCN) embeddings \
         for topic discovery in NLP literature.",
    );
    ui.add_space(8.0);

    ui.heading("Method Summary");
    for item in [
        "SBERT used for semantic representation",
        "Citation graph modeled using GCN",
        "Fusion via weighted concatenation",
        "Clustering evaluated using multiple metrics",
    ] {
        ui.label(format!("•  {item}"));
    }
}

pub fn footer(ui: &mut Ui) {
    ui.separator();
    ui.label(
        RichText::new("ETH-safe deployment: all results are precomputed, no live model execution.")
            .small()
            .weak(),
    );
}

/// Visible replacement for every section that needs the loaded data.
pub fn load_error(ui: &mut Ui, err: &DataError) {
    ui.add_space(8.0);
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, Color32::RED))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new("Results could not be loaded").strong().color(Color32::RED));
            ui.label(err.to_string());
        });
}

// ---------------------------------------------------------------------------
// Quantitative results
// ---------------------------------------------------------------------------

/// Fixed metrics table; the best value of each column is highlighted.
pub fn metrics_table(ui: &mut Ui) {
    let best: Vec<Option<usize>> = Metric::ALL.iter().map(|m| m.best(&RESULT_METRICS)).collect();

    ui.push_id("metrics_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(120.0))
            .columns(Column::auto().at_least(110.0), Metric::ALL.len())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Method");
                });
                for metric in Metric::ALL {
                    header.col(|ui: &mut Ui| {
                        let arrow = if metric.higher_is_better() { "↑" } else { "↓" };
                        ui.strong(format!("{} {arrow}", metric.label()));
                    });
                }
            })
            .body(|mut body| {
                for (i, record) in RESULT_METRICS.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(record.method);
                        });
                        for (metric, best) in Metric::ALL.iter().zip(&best) {
                            row.col(|ui: &mut Ui| {
                                let text = RichText::new(format!("{:.4}", metric.value(record)));
                                if *best == Some(i) {
                                    ui.label(text.strong().color(Color32::LIGHT_GREEN));
                                } else {
                                    ui.label(text);
                                }
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Cluster keyword summaries
// ---------------------------------------------------------------------------

pub fn keyword_section(ui: &mut Ui, state: &AppState) {
    let Some(loaded) = state.loaded() else {
        return;
    };

    ui.heading("Cluster Keyword Summaries");
    if loaded.keywords.is_empty() {
        ui.label("No cluster keywords available.");
    }
    for summary in keyword_summaries(&loaded.keywords) {
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Cluster {}", summary.cluster))
                .strong()
                .size(16.0)
                .color(state.colors.color_for_key(summary.cluster)),
        );
        ui.label(summary.text);
    }
}

// ---------------------------------------------------------------------------
// Representative papers
// ---------------------------------------------------------------------------

pub fn papers_section(ui: &mut Ui, state: &mut AppState) {
    if state.loaded().is_none() {
        return;
    }

    ui.heading("Representative Papers");

    let mut choice: Option<ClusterId> = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Cluster");
        let current = state
            .selected
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default();
        ComboBox::from_id_salt("cluster_select")
            .selected_text(RichText::new(current))
            .show_ui(ui, |ui: &mut Ui| {
                for id in &state.cluster_ids {
                    let size = state.cluster_sizes.get(id).copied().unwrap_or(0);
                    let label = RichText::new(format!("{id}  ({size} papers)"))
                        .color(state.colors.color_for(id));
                    let is_selected = state.selected.as_ref() == Some(id);
                    if ui.selectable_label(is_selected, label).clicked() && !is_selected {
                        choice = Some(id.clone());
                    }
                }
            });

        ui.add(
            egui::DragValue::new(&mut state.row_limit)
                .range(1..=100)
                .prefix("show "),
        );
    });

    if let Some(id) = choice {
        // Unknown ids are reported through the status message.
        let _ = state.select_cluster(id);
    }

    let rows = state.selected_rows();
    ui.label(
        RichText::new(format!(
            "Showing {} of {} papers in this cluster",
            rows.len(),
            state.selected_size()
        ))
        .weak(),
    );
    if rows.is_empty() {
        ui.label("No papers in this cluster.");
        return;
    }

    ui.push_id("papers_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder().at_least(240.0).clip(true))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(100.0))
            .header(ROW_HEIGHT, |mut header| {
                for name in ["title", "year", "citationCount"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for paper in &rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(paper.title).on_hover_text(paper.title);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(paper.year.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(paper.citation_count.to_string());
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

pub fn export_button(ui: &mut Ui, state: &mut AppState) {
    let enabled = state.loaded().is_some();
    if ui
        .add_enabled(enabled, egui::Button::new("Download Clustered Papers (CSV)"))
        .clicked()
    {
        save_export_dialog(state);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let enabled = state.loaded().is_some();
            if ui
                .add_enabled(enabled, egui::Button::new("Export CSV…"))
                .clicked()
            {
                save_export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(loaded) = state.loaded() {
            ui.label(format!(
                "{} papers in {} clusters",
                loaded.papers.len(),
                state.cluster_ids.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save clustered papers")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export_to(&path) {
            Ok(_) => {
                state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export CSV: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
