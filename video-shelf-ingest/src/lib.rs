//! Catalog ingestion pipelines.
//!
//! Two entry points mutate the catalog, both strictly append-only:
//! [`add_video`] creates a stub entry from a URL or bare video ID, and
//! [`ingest_folder`] consumes a prepared folder of slides and
//! description files, rendering the slides to PDF and publishing the
//! artifacts alongside the new entry. Title lookup is best-effort: a
//! failed oEmbed fetch falls back to a placeholder title and is never
//! surfaced as an error.

pub mod add;
pub mod describe;
pub mod entry;
pub mod error;
pub mod folder;
pub mod oembed;
pub mod render;

pub use add::{AddOptions, AddOutcome, add_video};
pub use describe::{parse_tags, summarize};
pub use entry::build_entry;
pub use error::IngestError;
pub use folder::{FolderOptions, FolderSources, IngestOutcome, ingest_folder, locate_sources};
pub use oembed::fetch_title;
pub use render::render_pdf;

/// Today's date in the catalog's `YYYY-MM-DD` form (UTC).
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
