// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts between the egui screen space and the
//! canvas-local pixel space boxes are stored in. The canvas has a fixed
//! size, so the conversion is a pure translation by the widget rect's
//! origin.

use crate::models::annotation::Point;

/// Convert a screen position to canvas-local pixels.
pub fn screen_to_canvas(pos: egui::Pos2, canvas_rect: &egui::Rect) -> Point {
    Point::new(
        (pos.x - canvas_rect.min.x) as f64,
        (pos.y - canvas_rect.min.y) as f64,
    )
}

/// Convert a canvas-local point to a screen position.
pub fn canvas_to_screen(point: &Point, canvas_rect: &egui::Rect) -> egui::Pos2 {
    egui::pos2(
        canvas_rect.min.x + point.x as f32,
        canvas_rect.min.y + point.y as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(120.0, 60.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_screen_canvas_roundtrip() {
        let canvas_rect = rect();
        let screen = egui::pos2(400.0, 300.0);

        let canvas = screen_to_canvas(screen, &canvas_rect);
        let back = canvas_to_screen(&canvas, &canvas_rect);

        assert!((back.x - screen.x).abs() < 0.0001);
        assert!((back.y - screen.y).abs() < 0.0001);
    }

    #[test]
    fn test_canvas_origin_maps_to_rect_min() {
        let canvas_rect = rect();

        let origin = screen_to_canvas(canvas_rect.min, &canvas_rect);
        assert_eq!(origin.x, 0.0);
        assert_eq!(origin.y, 0.0);

        let back = canvas_to_screen(&Point::new(0.0, 0.0), &canvas_rect);
        assert_eq!(back, canvas_rect.min);
    }
}
