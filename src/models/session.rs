// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing session: the pointer-drag state machine and image navigation.
//!
//! The session tracks which image is current, whether a drag is in
//! flight, and the uncommitted box being drawn. Pointer events arrive
//! from the canvas in canvas-local pixels; on release the finished box
//! is committed to the annotation store.

use crate::models::annotation::{BoundingBox, Point};
use crate::models::store::AnnotationStore;

/// Per-process drawing state for one fixed image sequence.
#[derive(Debug)]
pub struct DrawingSession {
    image_count: usize,
    current_index: usize,
    in_progress: Option<BoundingBox>,
    dragging: bool,
}

impl DrawingSession {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            current_index: 0,
            in_progress: None,
            dragging: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn in_progress(&self) -> Option<&BoundingBox> {
        self.in_progress.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn at_last(&self) -> bool {
        self.current_index + 1 >= self.image_count
    }

    /// Anchor a new box at the press point. Ignored while a drag is
    /// already in flight so a stray press cannot restart it.
    pub fn pointer_down(&mut self, point: Point) {
        if self.dragging {
            return;
        }
        self.in_progress = Some(BoundingBox::at(point));
        self.dragging = true;
    }

    /// Track the pointer with the box's second corner. Silently ignored
    /// when no drag is active.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.dragging {
            return;
        }
        if let Some(bbox) = self.in_progress.as_mut() {
            bbox.set_second_corner(point);
        }
    }

    /// Finish the drag: commit the box to `image_id`'s entry and return
    /// to idle. A click with no movement commits a zero-area box; there
    /// is no minimum-size filter. Silently ignored when no drag is
    /// active.
    pub fn pointer_up(&mut self, store: &mut AnnotationStore, image_id: &str) {
        if !self.dragging {
            return;
        }
        if let Some(bbox) = self.in_progress.take() {
            store.commit(image_id, bbox);
        }
        self.dragging = false;
    }

    /// Step back one image, clamped at the first. Navigating while a
    /// drag is in flight abandons the box uncommitted.
    pub fn go_to_previous(&mut self) {
        self.cancel_drag();
        if self.current_index > 0 {
            self.current_index -= 1;
            log::info!("Moved to image {}", self.current_index);
        }
    }

    /// Step forward one image, clamped at the last. Navigating while a
    /// drag is in flight abandons the box uncommitted.
    pub fn go_to_next(&mut self) {
        self.cancel_drag();
        if self.current_index + 1 < self.image_count {
            self.current_index += 1;
            log::info!("Moved to image {}", self.current_index);
        }
    }

    fn cancel_drag(&mut self) {
        self.in_progress = None;
        self.dragging = false;
    }
}
