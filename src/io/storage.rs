// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Key-value persistence sink for the saved annotation snapshot.
//!
//! The store trait is deliberately tiny: synchronous get/set of string
//! values under string keys. The file-backed implementation keeps each
//! key in its own JSON file under a configurable directory.

use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

/// Synchronous key-value sink. Writes either succeed or surface an
/// error to the caller; there is no retry.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key lives at `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store, used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("markbox-{}-{}", name, std::process::id()))
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.get("annotations").unwrap().is_none());
        store.set("annotations", "{}").unwrap();
        assert_eq!(store.get("annotations").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let store = FileStore::new(scratch_dir("missing"));
        assert!(store.get("annotations").unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileStore::new(&dir);
        store.set("annotations", r#"{"image_1":[]}"#).unwrap();
        assert_eq!(
            store.get("annotations").unwrap().as_deref(),
            Some(r#"{"image_1":[]}"#)
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn file_store_overwrites_on_second_set() {
        let dir = scratch_dir("overwrite");
        let mut store = FileStore::new(&dir);
        store.set("annotations", "{}").unwrap();
        store.set("annotations", r#"{"image_2":[]}"#).unwrap();
        assert_eq!(
            store.get("annotations").unwrap().as_deref(),
            Some(r#"{"image_2":[]}"#)
        );
        let _ = std::fs::remove_dir_all(dir);
    }
}
