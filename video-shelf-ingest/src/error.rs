use std::path::PathBuf;

use video_shelf_catalog::CatalogError;

/// Errors that can occur during catalog ingestion.
///
/// Every variant is fatal to the current invocation; nothing here is
/// retried. Title-lookup failures are deliberately absent — they
/// degrade to a placeholder title instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("could not extract a YouTube video ID from: {0}")]
    UnrecognizedSource(String),

    #[error("a video with youtubeId \"{0}\" already exists in the catalog")]
    DuplicateId(String),

    #[error("required {label} not found at: {}", path.display())]
    MissingArtifact { label: &'static str, path: PathBuf },

    #[error("PDF render failed: {0}")]
    Render(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
