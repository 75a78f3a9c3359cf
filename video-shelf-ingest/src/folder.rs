//! Prepared-folder ingestion.
//!
//! A prepared folder holds the publishing sources for one video:
//!
//! ```text
//! inbox/next/
//!   slides.html       (required)
//!   description.md    (or description.txt; one is required)
//!   tags.txt          (optional, comma/newline separated)
//! ```
//!
//! Ingestion copies the sources into `public/resources/<slug>/`,
//! renders `slides.pdf` from the HTML, and prepends the full catalog
//! entry.

use std::fs;
use std::path::{Path, PathBuf};

use video_shelf_catalog::{Catalog, CallToAction, Resource, ResourceKind, extract_video_id};

use crate::describe::{parse_tags, summarize};
use crate::entry::build_entry;
use crate::error::IngestError;
use crate::oembed::fetch_title;
use crate::render::render_pdf;

/// Resolved source files inside a prepared folder.
#[derive(Debug)]
pub struct FolderSources {
    pub slides: PathBuf,
    pub description: PathBuf,
    pub tags: Option<PathBuf>,
}

/// Locate the required and optional source files in a prepared folder.
///
/// `slides.html` is required. The description may be `description.md`
/// or, failing that, `description.txt`; absence of both is a hard
/// failure. `tags.txt` is optional.
pub fn locate_sources(folder: &Path) -> Result<FolderSources, IngestError> {
    let slides = folder.join("slides.html");
    if !slides.is_file() {
        return Err(IngestError::MissingArtifact {
            label: "slides.html",
            path: slides,
        });
    }

    let md = folder.join("description.md");
    let description = if md.is_file() {
        md
    } else {
        let txt = folder.join("description.txt");
        if !txt.is_file() {
            return Err(IngestError::MissingArtifact {
                label: "description.md or description.txt",
                path: txt,
            });
        }
        txt
    };

    let tags = Some(folder.join("tags.txt")).filter(|p| p.is_file());

    Ok(FolderSources {
        slides,
        description,
        tags,
    })
}

/// Options for [`ingest_folder`].
#[derive(Debug, Clone)]
pub struct FolderOptions {
    /// Path to `videos.json`.
    pub catalog_path: PathBuf,
    /// Directory holding per-slug resource folders (`public/resources`).
    pub resources_dir: PathBuf,
    /// The prepared folder to consume.
    pub folder: PathBuf,
    /// The URL or bare video ID given on the command line.
    pub source: String,
    /// Optional call-to-action for the entry.
    pub cta: Option<CallToAction>,
    /// Skip the oEmbed title lookup entirely (offline mode).
    pub skip_lookup: bool,
}

/// What a successful folder ingestion produced.
#[derive(Debug)]
pub struct IngestOutcome {
    pub youtube_id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    /// Where the artifacts were published.
    pub entry_dir: PathBuf,
    /// Site-relative page path for the new entry.
    pub page_path: String,
}

/// Ingest a prepared folder into the catalog.
pub fn ingest_folder(opts: &FolderOptions) -> Result<IngestOutcome, IngestError> {
    let youtube_id = extract_video_id(&opts.source)
        .ok_or_else(|| IngestError::UnrecognizedSource(opts.source.clone()))?;

    let sources = locate_sources(&opts.folder)?;

    let mut catalog = Catalog::load(&opts.catalog_path)?;
    if catalog.contains_id(&youtube_id) {
        return Err(IngestError::DuplicateId(youtube_id));
    }

    let title = if opts.skip_lookup {
        None
    } else {
        let original = (opts.source.trim() != youtube_id).then_some(opts.source.as_str());
        fetch_title(&youtube_id, original)
    };

    let full_description =
        fs::read_to_string(&sources.description).map_err(|e| IngestError::io(&sources.description, e))?;
    let tags_text = match &sources.tags {
        Some(path) => fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?,
        None => String::new(),
    };

    let date = crate::today();
    let mut record = build_entry(&youtube_id, title.as_deref(), &date, &catalog.slugs());
    let slug = record.slug.clone();

    // Publish the artifacts before the catalog references them.
    let entry_dir = opts.resources_dir.join(&slug);
    fs::create_dir_all(&entry_dir).map_err(|e| IngestError::io(&entry_dir, e))?;

    let dest_slides_html = entry_dir.join("slides.html");
    let dest_slides_pdf = entry_dir.join("slides.pdf");
    let dest_description_md = entry_dir.join("description.md");
    let dest_description_txt = entry_dir.join("description.txt");

    fs::copy(&sources.slides, &dest_slides_html)
        .map_err(|e| IngestError::io(&dest_slides_html, e))?;
    fs::copy(&sources.description, &dest_description_md)
        .map_err(|e| IngestError::io(&dest_description_md, e))?;
    fs::copy(&sources.description, &dest_description_txt)
        .map_err(|e| IngestError::io(&dest_description_txt, e))?;

    render_pdf(&dest_slides_html, &dest_slides_pdf)?;

    record.description = summarize(&full_description);
    record.description_file = Some(format!("/resources/{slug}/description.md"));
    record.tags = parse_tags(&tags_text);
    record.resources = vec![
        Resource {
            label: "Slides (HTML)".to_string(),
            kind: ResourceKind::Html,
            url: format!("/resources/{slug}/slides.html"),
        },
        Resource {
            label: "Slides (PDF)".to_string(),
            kind: ResourceKind::Pdf,
            url: format!("/resources/{slug}/slides.pdf"),
        },
        Resource {
            label: "Description".to_string(),
            kind: ResourceKind::Text,
            url: format!("/resources/{slug}/description.txt"),
        },
    ];
    record.primary_cta = opts.cta.clone();

    catalog.push_front(&record)?;
    catalog.save(&opts.catalog_path)?;

    Ok(IngestOutcome {
        youtube_id: record.youtube_id,
        slug,
        title: record.title,
        date: record.date,
        entry_dir,
        page_path: format!("/videos/{}/", record.slug),
    })
}
