// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! The image sequence is fixed at startup: it comes from a `markbox.json`
//! file in the working directory when one exists, otherwise from the
//! built-in defaults. The core never mutates it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "markbox.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ordered list of image paths to step through.
    #[serde(default = "default_images")]
    pub images: Vec<String>,
    /// Directory the key-value store writes into.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            storage_dir: default_storage_dir(),
        }
    }
}

fn default_images() -> Vec<String> {
    vec![
        "images/image_1.jpg".to_string(),
        "images/image_2.jpg".to_string(),
        "images/image_3.jpg".to_string(),
        "images/image_4.jpg".to_string(),
    ]
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    /// Load the config file at `path`, falling back to defaults when it
    /// does not exist. A file that exists but fails to parse is an
    /// error, not a silent fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/markbox.json")).unwrap();
        assert_eq!(config.images.len(), 4);
        assert_eq!(config.images[0], "images/image_1.jpg");
        assert_eq!(config.storage_dir, PathBuf::from("."));
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"images":["a.png"]}"#).unwrap();
        assert_eq!(config.images, vec!["a.png".to_string()]);
        assert_eq!(config.storage_dir, PathBuf::from("."));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "markbox-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{not json").unwrap();
        assert!(AppConfig::load(&path).is_err());
        let _ = std::fs::remove_file(path);
    }
}
