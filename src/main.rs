// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! MarkBox - Bounding Box Annotation Tool
//!
//! A desktop application for stepping through a fixed list of images
//! and drawing rectangular bounding boxes over them, with local
//! persistence and JSON export.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{ensure, Context, Result};
use app::MarkboxApp;
use config::AppConfig;
use io::storage::FileStore;
use models::store::AnnotationStore;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load(std::path::Path::new(config::CONFIG_FILE))?;
    ensure!(!config.images.is_empty(), "Configured image list is empty");

    let sink = FileStore::new(&config.storage_dir);
    let mut store = AnnotationStore::new();
    store
        .load_on_startup(&sink)
        .context("Failed to load saved annotations")?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 720.0])
            .with_title("MarkBox - Bounding Box Annotation Tool"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "MarkBox",
        options,
        Box::new(move |_cc| Ok(Box::new(MarkboxApp::new(config, store, sink)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
