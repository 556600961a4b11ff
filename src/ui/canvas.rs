// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas: image backdrop plus bounding-box overlay.
//!
//! This module renders the fixed-size drawing surface and translates
//! pointer interactions into canvas actions for the application to
//! apply. The overlay is redrawn from scratch every frame as a pure
//! function of the committed boxes and the in-progress box.

use crate::models::annotation::{BoundingBox, Point};
use crate::util::geometry;

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

const STROKE_WIDTH: f32 = 2.0;
const COMMITTED_COLOR: egui::Color32 = egui::Color32::RED;
const IN_PROGRESS_COLOR: egui::Color32 = egui::Color32::GREEN;

/// Result of canvas interaction for one frame.
pub enum CanvasAction {
    None,
    /// Press and release without crossing the drag threshold. Still
    /// commits a box: a click is a zero-area annotation.
    Clicked(Point),
    DragStarted(Point),
    DragMoved(Point),
    DragFinished,
}

/// Display the drawing surface and report pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    committed: &[BoundingBox],
    in_progress: Option<&BoundingBox>,
) -> CanvasAction {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let canvas_rect = response.rect;

    painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));

    if let Some(texture) = texture {
        painter.image(
            texture.id(),
            canvas_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    } else {
        painter.text(
            canvas_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Image unavailable",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(150),
        );
    }

    for bbox in committed {
        draw_box(&painter, bbox, &canvas_rect, COMMITTED_COLOR);
    }
    if let Some(bbox) = in_progress {
        draw_box(&painter, bbox, &canvas_rect, IN_PROGRESS_COLOR);
    }

    // egui reports a press+release that never crosses the drag
    // threshold as a click, not a drag; it is surfaced separately so
    // zero-area boxes still commit.
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return CanvasAction::Clicked(geometry::screen_to_canvas(pos, &canvas_rect));
        }
    }
    if response.drag_started_by(egui::PointerButton::Primary) {
        // The drag only starts once the pointer has travelled past the
        // click threshold; the anchor is the press origin, not wherever
        // the pointer is by then.
        let anchor = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = anchor {
            return CanvasAction::DragStarted(geometry::screen_to_canvas(pos, &canvas_rect));
        }
    }
    if response.drag_stopped_by(egui::PointerButton::Primary) {
        return CanvasAction::DragFinished;
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            return CanvasAction::DragMoved(geometry::screen_to_canvas(pos, &canvas_rect));
        }
    }

    CanvasAction::None
}

/// Stroke one box. `from_two_pos` normalizes either corner orientation,
/// so boxes dragged up or to the left render the same as any other.
fn draw_box(
    painter: &egui::Painter,
    bbox: &BoundingBox,
    canvas_rect: &egui::Rect,
    color: egui::Color32,
) {
    let a = geometry::canvas_to_screen(&Point::new(bbox.x1, bbox.y1), canvas_rect);
    let b = geometry::canvas_to_screen(&Point::new(bbox.x2, bbox.y2), canvas_rect);
    let rect = egui::Rect::from_two_pos(a, b);
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(STROKE_WIDTH, color));
}
