//! JSON catalog persistence.
//!
//! The catalog is a single `videos.json` document holding an ordered
//! array of records, newest first. The store keeps the raw JSON values
//! it loaded and only ever prepends to them: elements that fail record
//! validation are filtered from the display view but survive an
//! append + save cycle untouched. Saves go through a temporary file in
//! the target directory, so a failed write never leaves a truncated
//! document behind.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::types::VideoRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path} must contain a top-level JSON array")]
    NotAnArray { path: String },
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// The ordered catalog of video records.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Value>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a JSON document on disk.
    ///
    /// Fails if the file is unreadable, is not valid JSON, or its top
    /// level is not an array. Individual elements are not validated
    /// here; see [`Catalog::videos`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let parsed: Value = serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        match parsed {
            Value::Array(entries) => Ok(Self { entries }),
            _ => Err(CatalogError::NotAnArray {
                path: path.display().to_string(),
            }),
        }
    }

    /// Number of stored elements, valid or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The display view: every element that parses as a [`VideoRecord`],
    /// sorted by date descending. Elements that fail validation are
    /// skipped, never deleted. The sort is recomputed on every read —
    /// on-disk order is a convention, not an invariant, once entries
    /// have been hand-edited.
    pub fn videos(&self) -> Vec<VideoRecord> {
        let mut videos: Vec<VideoRecord> = self
            .entries
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect();
        videos.sort_by(|a, b| b.date.cmp(&a.date));
        videos
    }

    /// Whether any element carries this `youtubeId`, regardless of
    /// whether the element is an otherwise valid record.
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|v| v.get("youtubeId").and_then(Value::as_str) == Some(id))
    }

    /// Every slug present in the catalog, taken from any element with a
    /// string `slug` field so that collision probing also avoids slugs
    /// held by entries the display view rejects.
    pub fn slugs(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter_map(|v| v.get("slug").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    /// Prepend a new record. Existing elements are never reordered or
    /// rewritten.
    pub fn push_front(&mut self, record: &VideoRecord) -> Result<(), CatalogError> {
        let value = serde_json::to_value(record).map_err(CatalogError::Serialize)?;
        self.entries.insert(0, value);
        Ok(())
    }

    /// Serialize the full catalog back to disk: pretty-printed with
    /// 2-space indentation and a trailing newline, written via a
    /// temporary file in the same directory and an atomic rename.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let mut out =
            serde_json::to_string_pretty(&self.entries).map_err(CatalogError::Serialize)?;
        out.push('\n');

        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new("."))).map_err(|e| {
            CatalogError::Write {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        fs::write(tmp.path(), &out).map_err(|e| CatalogError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        tmp.persist(path).map_err(|e| CatalogError::Write {
            path: path.display().to_string(),
            source: e.error,
        })?;
        Ok(())
    }
}
