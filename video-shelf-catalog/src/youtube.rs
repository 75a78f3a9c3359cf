//! Canonical YouTube video-ID extraction.
//!
//! Accepts a bare 11-character ID or any of the common URL shapes
//! (`youtu.be/<id>`, `youtube.com/watch?v=<id>`, `/embed/<id>`,
//! `/shorts/<id>`) and normalizes them to the canonical ID. Anything
//! else — unrecognized hosts included — is a definitive failure,
//! modeled as `None` rather than an error.

use url::Url;

const VIDEO_ID_LEN: usize = 11;

/// Check whether a string is exactly an 11-character video ID
/// (`[A-Za-z0-9_-]{11}`).
pub fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract the canonical video ID from a URL or bare ID.
///
/// # Examples
///
/// ```
/// use video_shelf_catalog::extract_video_id;
///
/// assert_eq!(
///     extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
///     Some("dQw4w9WgXcQ"),
/// );
/// assert_eq!(extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
/// ```
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Raw IDs pass straight through (common case).
    if is_video_id(trimmed) {
        return Some(trimmed.to_string());
    }

    let url = Url::parse(trimmed).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    // youtu.be/<id>
    if host == "youtu.be" {
        let id = url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()))?;
        return is_video_id(id).then(|| id.to_string());
    }

    if host == "youtube.com" || host == "m.youtube.com" {
        // /watch?v=<id>
        if let Some(v) = url
            .query_pairs()
            .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
            && is_video_id(&v)
        {
            return Some(v);
        }

        // /embed/<id> or /shorts/<id>
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        if let [first, id, ..] = segments.as_slice()
            && (*first == "embed" || *first == "shorts")
            && is_video_id(id)
        {
            return Some((*id).to_string());
        }
    }

    None
}

/// Canonical watch URL for a video ID.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}
