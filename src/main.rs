mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use app::ClusterViewerApp;
use config::ArtifactPaths;
use data::cache::DatasetCache;
use data::store::{ArtifactStore, FsStore};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let store: Box<dyn ArtifactStore> = Box::new(FsStore::new(ArtifactPaths::from_env()));
    let cache = Arc::new(DatasetCache::new(store));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SBERT + GCN Topic Discovery",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ClusterViewerApp::new(cache)))
        }),
    )
}
