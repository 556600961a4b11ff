// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation store: the working set and the saved snapshot.
//!
//! The working set is mutated continuously as boxes are committed; the
//! saved snapshot only changes on an explicit save, which also writes it
//! to the key-value sink.

use crate::io::storage::KeyValueStore;
use crate::models::annotation::{AnnotationMap, BoundingBox};
use anyhow::{Context, Result};

/// Fixed key under which the saved snapshot lives in the sink.
pub const STORAGE_KEY: &str = "annotations";

/// Owns all committed annotations for the lifetime of the process.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    /// Live mapping, updated on every commit.
    working: AnnotationMap,
    /// Last explicitly-saved state, persisted to the sink.
    saved: AnnotationMap,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished box to the working-set entry for `image_id`,
    /// creating the entry on the first box.
    pub fn commit(&mut self, image_id: &str, bbox: BoundingBox) {
        let boxes = self.working.entry(image_id.to_string()).or_default();
        boxes.push(bbox);
        log::info!("Committed box on {}, total: {}", image_id, boxes.len());
    }

    /// Committed boxes for one image, in draw order.
    pub fn boxes_for(&self, image_id: &str) -> &[BoundingBox] {
        self.working.get(image_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn working(&self) -> &AnnotationMap {
        &self.working
    }

    #[cfg(test)]
    pub fn saved(&self) -> &AnnotationMap {
        &self.saved
    }

    /// Copy the working set's current entry for `image_id` into the saved
    /// snapshot, then persist the snapshot to the sink.
    ///
    /// Only the given image's entry is refreshed; other images keep
    /// whatever was last saved for them. The serialization happens after
    /// the snapshot mutation so the sink always receives the state as
    /// updated by this call.
    pub fn save(&mut self, image_id: &str, sink: &mut dyn KeyValueStore) -> Result<()> {
        match self.working.get(image_id) {
            Some(boxes) if !boxes.is_empty() => {
                self.saved.insert(image_id.to_string(), boxes.clone());
            }
            // An image with no boxes has no key in the persisted shape.
            _ => {
                self.saved.remove(image_id);
            }
        }

        let json = serde_json::to_string(&self.saved)?;
        sink.set(STORAGE_KEY, &json)
            .context("writing annotations to storage")?;
        Ok(())
    }

    /// Populate the saved snapshot from the sink, if it holds anything.
    ///
    /// A missing value leaves the snapshot empty; malformed JSON is a
    /// fatal startup error for the caller to surface. The working set is
    /// not seeded from the snapshot.
    pub fn load_on_startup(&mut self, sink: &dyn KeyValueStore) -> Result<()> {
        if let Some(raw) = sink.get(STORAGE_KEY)? {
            self.saved = serde_json::from_str(&raw)
                .context("stored annotations are not valid JSON")?;
            log::info!("Loaded saved annotations for {} image(s)", self.saved.len());
        }
        Ok(())
    }

    /// Serialize the entire working set for export, regardless of what
    /// has been saved. An empty working set yields `{}`.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.working)?)
    }
}
