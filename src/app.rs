// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module wires the UI to the core: toolbar and canvas actions are
//! translated into drawing-session and annotation-store operations, and
//! the canvas is redrawn from their state every frame.

use crate::config::AppConfig;
use crate::io::storage::FileStore;
use crate::io::{media, serialization};
use crate::models::session::DrawingSession;
use crate::models::store::AnnotationStore;
use crate::ui::{canvas, toolbar};
use std::collections::HashMap;
use std::path::Path;

/// Main application state.
pub struct MarkboxApp {
    /// Fixed, ordered image sequence from configuration.
    images: Vec<String>,

    /// Committed annotations (working set + saved snapshot).
    store: AnnotationStore,

    /// Pointer-drag state machine and current image index.
    session: DrawingSession,

    /// Persistence sink the saved snapshot is written to.
    sink: FileStore,

    /// Lazily-loaded textures per image index; `None` marks a failed
    /// load so it is not retried every frame.
    textures: HashMap<usize, Option<egui::TextureHandle>>,

    /// Transient status line content after a save or export.
    status: Option<String>,
}

impl MarkboxApp {
    pub fn new(config: AppConfig, store: AnnotationStore, sink: FileStore) -> Self {
        let session = DrawingSession::new(config.images.len());
        Self {
            images: config.images,
            store,
            session,
            sink,
            textures: HashMap::new(),
            status: None,
        }
    }

    fn current_image_id(&self) -> &str {
        &self.images[self.session.current_index()]
    }

    /// Texture for the current image, loading it on first use.
    fn current_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let index = self.session.current_index();
        if !self.textures.contains_key(&index) {
            let entry = match media::load_image(Path::new(&self.images[index])) {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    Some(ctx.load_texture(
                        format!("image_{index}"),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::error!("Failed to load {}: {:#}", self.images[index], e);
                    None
                }
            };
            self.textures.insert(index, entry);
        }
        self.textures.get(&index).and_then(|t| t.clone())
    }

    fn save_current(&mut self) {
        let image_id = self.current_image_id().to_string();
        match self.store.save(&image_id, &mut self.sink) {
            Ok(()) => {
                log::info!("Saved annotations for {}", image_id);
                self.status = Some(format!("Saved {}", image_id));
            }
            Err(e) => {
                log::error!("Failed to save annotations: {:#}", e);
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    fn export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(serialization::EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match serialization::export_json(&self.store, &path) {
            Ok(()) => {
                log::info!("Exported annotations to {}", path.display());
                self.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export annotations: {:#}", e);
                self.status = Some(format!("Export failed: {}", e));
            }
        }
    }
}

impl eframe::App for MarkboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                let label = format!(
                    "Image {} / {} — {}",
                    self.session.current_index() + 1,
                    self.images.len(),
                    self.current_image_id()
                );
                toolbar::show(
                    ui,
                    self.session.at_first(),
                    self.session.at_last(),
                    &label,
                    self.status.as_deref(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Previous => {
                self.session.go_to_previous();
                self.status = None;
            }
            toolbar::ToolbarAction::Next => {
                self.session.go_to_next();
                self.status = None;
            }
            toolbar::ToolbarAction::Save => self.save_current(),
            toolbar::ToolbarAction::Export => self.export(),
            toolbar::ToolbarAction::None => {}
        }

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let texture = self.current_texture(ui.ctx());
                let image_id = self.current_image_id().to_string();
                let committed = self.store.boxes_for(&image_id);

                let action = ui
                    .vertical_centered(|ui| {
                        canvas::show(ui, texture.as_ref(), committed, self.session.in_progress())
                    })
                    .inner;

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(format!("{} box(es) on this image", committed.len()));
                    if self.session.is_dragging() {
                        ui.separator();
                        ui.label("Drawing...");
                    }
                });

                action
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::Clicked(point) => {
                let image_id = self.current_image_id().to_string();
                self.session.pointer_down(point);
                self.session.pointer_up(&mut self.store, &image_id);
            }
            canvas::CanvasAction::DragStarted(point) => self.session.pointer_down(point),
            canvas::CanvasAction::DragMoved(point) => self.session.pointer_move(point),
            canvas::CanvasAction::DragFinished => {
                let image_id = self.current_image_id().to_string();
                self.session.pointer_up(&mut self.store, &image_id);
            }
            canvas::CanvasAction::None => {}
        }
    }
}
