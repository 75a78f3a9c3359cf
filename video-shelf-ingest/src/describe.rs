//! Description and tag normalization for prepared-folder ingestion.

use video_shelf_catalog::slugify;

/// Hard cap on the short description stored in the catalog.
const SUMMARY_MAX: usize = 450;
/// Minimum length at which a word-boundary cut is still acceptable.
const SUMMARY_MIN_CUT: usize = 300;

/// Collapse a full description file into the short catalog summary.
///
/// Whitespace (including CRLF line endings) is collapsed to single
/// spaces; text longer than the cap is cut at the last word boundary
/// past 300 characters, or hard-cut when the boundary would land too
/// early.
pub fn summarize(full_text: &str) -> String {
    let cleaned = full_text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.len() <= SUMMARY_MAX {
        return cleaned;
    }

    // Cut on a char boundary at or below the cap.
    let mut cut = SUMMARY_MAX;
    while !cleaned.is_char_boundary(cut) {
        cut -= 1;
    }
    let target = &cleaned[..cut];
    let trimmed = match target.rfind(' ') {
        Some(pos) if pos > SUMMARY_MIN_CUT => &target[..pos],
        _ => target,
    };
    trimmed.trim_end().to_string()
}

/// Parse a `tags.txt` body: entries split on commas or newlines, each
/// normalized to slug form, empties dropped. Duplicates in the source
/// are kept as written.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n')
        .map(slugify)
        .filter(|t| !t.is_empty())
        .collect()
}
