//! Slug generation and collision resolution.
//!
//! Slugs are the human-readable unique keys used for page URLs and
//! resource folder names: lowercase, `[a-z0-9-]` only, no leading,
//! trailing, or doubled hyphens.

use std::collections::HashSet;

/// Fallback slug base when the input slugifies to nothing.
const FALLBACK_SLUG: &str = "new-video";

/// Convert free text into a URL-safe slug.
///
/// Lowercases and trims the input, expands `&` to the word "and", then
/// collapses every run of non-alphanumeric characters into a single
/// hyphen. The result may be empty; callers needing a non-empty slug
/// should supply their own fallback base.
///
/// # Examples
///
/// ```
/// use video_shelf_catalog::slugify;
///
/// assert_eq!(slugify("C++ & Rust: A Comparison!"), "c-and-rust-a-comparison");
/// assert_eq!(slugify("  Hello,  World  "), "hello-world");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(input: &str) -> String {
    // "&" becomes a word, not a hyphen: "A&B" -> "a-and-b".
    let expanded = input.to_lowercase().trim().replace('&', " and ");

    let mut slug = String::with_capacity(expanded.len());
    let mut gap = false;
    for ch in expanded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }
    slug
}

/// Resolve a slug base against the set of slugs already in the catalog.
///
/// Returns `base` unchanged when free, otherwise the first free probe of
/// `base-2`, `base-3`, … (always the lowest available suffix). An empty
/// base falls back to `"new-video"` before probing.
pub fn unique_slug(base: &str, existing: &HashSet<String>) -> String {
    let base = if base.is_empty() { FALLBACK_SLUG } else { base };
    if !existing.contains(base) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
