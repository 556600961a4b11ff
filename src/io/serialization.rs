// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation export.
//!
//! This module writes the working annotation set to a file chosen by
//! the user. The payload is the same JSON shape as the persisted
//! snapshot, sourced from the working set.

use crate::models::store::AnnotationStore;
use anyhow::Result;
use std::path::Path;

/// Suggested file name for the export dialog.
pub const EXPORT_FILE_NAME: &str = "annotations.json";

/// Write the full working set as pretty-printed JSON.
pub fn export_json(store: &AnnotationStore, path: &Path) -> Result<()> {
    let json = store.export_json()?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{AnnotationMap, BoundingBox, Point};

    #[test]
    fn exported_file_round_trips_the_working_set() {
        let mut store = AnnotationStore::new();
        let mut bbox = BoundingBox::at(Point::new(10.0, 10.0));
        bbox.set_second_corner(Point::new(50.0, 50.0));
        store.commit("image_1", bbox);

        let path = std::env::temp_dir().join(format!(
            "markbox-export-{}.json",
            std::process::id()
        ));
        export_json(&store, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: AnnotationMap = serde_json::from_str(&raw).unwrap();
        assert_eq!(&parsed, store.working());
        let _ = std::fs::remove_file(path);
    }
}
