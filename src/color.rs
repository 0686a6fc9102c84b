use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::ClusterId;

/// Evenly spaced hues, one per cluster.
pub fn cluster_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cluster → colour, shared by the selector and the keyword headings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ClusterColors {
    mapping: BTreeMap<ClusterId, Color32>,
}

impl ClusterColors {
    /// Assign colours to the sorted cluster identifiers.
    pub fn new(ids: &[ClusterId]) -> Self {
        let mapping = ids
            .iter()
            .cloned()
            .zip(cluster_palette(ids.len()))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, id: &ClusterId) -> Color32 {
        self.mapping.get(id).copied().unwrap_or(Color32::GRAY)
    }

    /// Colour for a keyword-map key, matched against the id's text.
    /// Keys absent from the table are grey.
    pub fn color_for_key(&self, key: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(id, _)| id.to_string() == key)
            .map(|(_, color)| *color)
            .unwrap_or(Color32::GRAY)
    }
}
