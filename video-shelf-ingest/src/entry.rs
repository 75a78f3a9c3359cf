//! Assembly of new catalog records.

use std::collections::HashSet;

use video_shelf_catalog::{Resource, ResourceKind, VideoRecord, slugify, unique_slug};

/// Build a new record from an extracted video ID.
///
/// `title` is the fetched title when the lookup succeeded; without it
/// the record gets a placeholder title naming the ID, and the slug is
/// derived from `video-<id>` instead. The slug is resolved against
/// `existing_slugs` before use. The starter resources point at the
/// conventional locations under `/resources/<slug>/`; richer artifact
/// sets (the prepared-folder pipeline) replace them after construction.
///
/// Duplicate-ID checking is the caller's responsibility — by the time
/// this runs, `Catalog::contains_id` must already have said no.
pub fn build_entry(
    youtube_id: &str,
    title: Option<&str>,
    date: &str,
    existing_slugs: &HashSet<String>,
) -> VideoRecord {
    let fallback = format!("video-{youtube_id}");
    let base = match title {
        Some(t) => {
            let slug = slugify(t);
            if slug.is_empty() { slugify(&fallback) } else { slug }
        }
        None => slugify(&fallback),
    };
    let slug = unique_slug(&base, existing_slugs);

    VideoRecord {
        title: title
            .map(str::to_string)
            .unwrap_or_else(|| format!("New Video ({youtube_id})")),
        youtube_id: youtube_id.to_string(),
        date: date.to_string(),
        description: String::new(),
        description_file: None,
        tags: Vec::new(),
        resources: vec![
            Resource {
                label: "Slides (PDF)".to_string(),
                kind: ResourceKind::Slides,
                url: format!("/resources/{slug}/slides.pdf"),
            },
            Resource {
                label: "Notes (HTML)".to_string(),
                kind: ResourceKind::Html,
                url: format!("/resources/{slug}/notes.html"),
            },
        ],
        primary_cta: None,
        slug,
    }
}
