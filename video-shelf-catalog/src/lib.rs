//! Video catalog data model, slug generation, and JSON I/O.
//!
//! This crate defines the persistent data model for the video resource
//! catalog without any network dependencies. Consumers can use these types
//! directly for serialization, display, or passing to `video-shelf-ingest`
//! for catalog mutation.

pub mod slug;
pub mod store;
pub mod types;
pub mod youtube;

pub use slug::{slugify, unique_slug};
pub use store::{Catalog, CatalogError};
pub use types::*;
pub use youtube::{extract_video_id, is_video_id, watch_url};
