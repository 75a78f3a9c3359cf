pub(crate) mod add;
pub(crate) mod ingest;
pub(crate) mod list;

use std::path::{Path, PathBuf};

/// Path of the catalog document inside a site root.
pub(crate) fn catalog_path(root: &Path) -> PathBuf {
    root.join("videos.json")
}

/// Directory of per-slug resource folders inside a site root.
pub(crate) fn resources_dir(root: &Path) -> PathBuf {
    root.join("public").join("resources")
}
