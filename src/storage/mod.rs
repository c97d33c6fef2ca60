// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for post records.
//!
//! Records live as one pretty-printed JSON file per post under a store
//! directory (`<store>/<post id>.json`). Loading is strict: a record
//! with an unexpected schema version, or with fields this build does
//! not know, is an error rather than a silent partial load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::state::PostRecord;

/// A directory of post records, one JSON file per post id.
#[derive(Debug, Clone)]
pub struct RecordStore {
    directory: PathBuf,
}

impl RecordStore {
    pub fn new(directory: &Path) -> Self {
        RecordStore {
            directory: directory.to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.directory.join(format!("{id}.json"))
    }

    /// Write one record, creating the store directory on first use.
    pub fn save(&self, record: &PostRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "could not create store directory {}",
                self.directory.display()
            )
        })?;
        let path = self.record_path(&record.id);
        let payload = serde_json::to_string_pretty(record)?;
        fs::write(&path, payload)
            .with_context(|| format!("could not write record to {}", path.display()))?;
        Ok(path)
    }

    /// Load one record by post id.
    pub fn load(&self, id: &str) -> Result<PostRecord> {
        let path = self.record_path(id);
        let payload = fs::read_to_string(&path)
            .with_context(|| format!("no stored record at {}", path.display()))?;
        let record: PostRecord = serde_json::from_str(&payload).with_context(|| {
            format!("record {} is not readable by this build", path.display())
        })?;
        record.check_schema()?;
        if record.id != id {
            bail!(
                "record at {} belongs to post `{}`",
                path.display(),
                record.id
            );
        }
        Ok(record)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.record_path(id).is_file()
    }

    /// All stored post ids, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }
        let mut ids: Vec<String> = fs::read_dir(&self.directory)
            .with_context(|| format!("could not read store {}", self.directory.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        ids.sort();
        Ok(ids)
    }
}
