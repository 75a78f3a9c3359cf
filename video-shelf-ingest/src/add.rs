//! The simple add pipeline: one URL or bare ID in, one stub entry out.

use std::fs;
use std::path::PathBuf;

use video_shelf_catalog::{Catalog, extract_video_id};

use crate::entry::build_entry;
use crate::error::IngestError;
use crate::oembed::fetch_title;

/// Options for [`add_video`].
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Path to `videos.json`.
    pub catalog_path: PathBuf,
    /// Directory holding per-slug resource folders (`public/resources`).
    pub resources_dir: PathBuf,
    /// The URL or bare video ID given on the command line.
    pub source: String,
    /// Skip the oEmbed title lookup entirely (offline mode).
    pub skip_lookup: bool,
}

/// What a successful add produced.
#[derive(Debug)]
pub struct AddOutcome {
    pub youtube_id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    /// The resource folder created for this entry.
    pub entry_dir: PathBuf,
}

/// Append a stub entry to the catalog: extract the ID, reject
/// duplicates, look up the title (best effort), prepend the record, and
/// create the empty per-slug resource folder.
pub fn add_video(opts: &AddOptions) -> Result<AddOutcome, IngestError> {
    let youtube_id = extract_video_id(&opts.source)
        .ok_or_else(|| IngestError::UnrecognizedSource(opts.source.clone()))?;

    let mut catalog = Catalog::load(&opts.catalog_path)?;
    if catalog.contains_id(&youtube_id) {
        return Err(IngestError::DuplicateId(youtube_id));
    }

    let title = if opts.skip_lookup {
        None
    } else {
        // Prefer the user's original URL; oEmbed accepts any watch shape.
        let original = (opts.source.trim() != youtube_id).then_some(opts.source.as_str());
        fetch_title(&youtube_id, original)
    };

    let date = crate::today();
    let record = build_entry(&youtube_id, title.as_deref(), &date, &catalog.slugs());

    catalog.push_front(&record)?;
    catalog.save(&opts.catalog_path)?;

    // Keep the resource folder tracked even while empty.
    let entry_dir = opts.resources_dir.join(&record.slug);
    fs::create_dir_all(&entry_dir).map_err(|e| IngestError::io(&entry_dir, e))?;
    let gitkeep = entry_dir.join(".gitkeep");
    if !gitkeep.exists() {
        fs::write(&gitkeep, "").map_err(|e| IngestError::io(&gitkeep, e))?;
    }

    Ok(AddOutcome {
        youtube_id: record.youtube_id,
        slug: record.slug,
        title: record.title,
        date: record.date,
        entry_dir,
    })
}
