//! Data model types for the video catalog.
//!
//! These types mirror the persisted `videos.json` schema: one record per
//! published video, each carrying its resource artifacts and optional
//! call-to-action.

use serde::{Deserialize, Serialize};

// ── Video record ────────────────────────────────────────────────────────────

/// One catalog entry, as persisted in `videos.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,
    /// URL-safe unique key derived from the title. Immutable once assigned.
    pub slug: String,
    /// Canonical 11-character YouTube video ID. Immutable once created.
    pub youtube_id: String,
    /// Creation date in `YYYY-MM-DD` form; the sole display sort key.
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_file: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<CallToAction>,
}

// ── Resources ───────────────────────────────────────────────────────────────

/// A downloadable or viewable artifact attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
}

/// Kind of resource artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Html,
    Code,
    Slides,
    Link,
    Text,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Code => "code",
            Self::Slides => "slides",
            Self::Link => "link",
            Self::Text => "text",
        }
    }
}

// ── Call to action ──────────────────────────────────────────────────────────

/// Optional promotional link shown alongside a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}
