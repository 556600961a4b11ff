// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the core data structures for representing
//! bounding boxes and the per-image annotation mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 2D point in canvas-local pixel coordinates.
///
/// Values outside the canvas bounds are permitted; boxes extending past
/// the edge simply clip visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangular bounding box stored as two opposite corners.
///
/// No ordering is imposed on the corners: `x2` may be less than `x1`
/// (likewise for `y`) when the user drags up or to the left. Rendering
/// normalizes the orientation; the stored values always preserve the
/// original drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Seed a box at a single point; both corners coincide until a drag
    /// moves the second one.
    pub fn at(point: Point) -> Self {
        Self {
            x1: point.x,
            y1: point.y,
            x2: point.x,
            y2: point.y,
        }
    }

    /// Move the second corner, leaving the anchor corner fixed.
    pub fn set_second_corner(&mut self, point: Point) {
        self.x2 = point.x;
        self.y2 = point.y;
    }
}

/// Mapping from image id to that image's committed boxes, in draw order.
///
/// Keys exist only for images with at least one box; an image with no
/// annotations has no entry rather than an empty list.
pub type AnnotationMap = BTreeMap<String, Vec<BoundingBox>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_box_is_degenerate_at_the_press_point() {
        let bbox = BoundingBox::at(Point::new(12.5, 40.0));
        assert_eq!(bbox.x1, 12.5);
        assert_eq!(bbox.y1, 40.0);
        assert_eq!(bbox.x2, 12.5);
        assert_eq!(bbox.y2, 40.0);
    }

    #[test]
    fn second_corner_moves_without_disturbing_anchor() {
        let mut bbox = BoundingBox::at(Point::new(10.0, 10.0));
        bbox.set_second_corner(Point::new(3.0, 80.0));
        assert_eq!(bbox.x1, 10.0);
        assert_eq!(bbox.y1, 10.0);
        assert_eq!(bbox.x2, 3.0);
        assert_eq!(bbox.y2, 80.0);
    }

    #[test]
    fn serializes_with_corner_field_names() {
        let bbox = BoundingBox {
            x1: 1.0,
            y1: 2.0,
            x2: 3.0,
            y2: 4.0,
        };
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, r#"{"x1":1.0,"y1":2.0,"x2":3.0,"y2":4.0}"#);
    }
}
