//! Best-effort title lookup via the YouTube oEmbed endpoint.
//!
//! oEmbed needs no API key, just outbound HTTPS. The lookup is treated
//! as unreliable by contract: every failure path returns `None` so the
//! caller falls back to a placeholder title.

use std::time::Duration;

use serde::Deserialize;
use video_shelf_catalog::watch_url;

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
}

/// Fetch the video title, preferring the URL the user originally gave
/// (oEmbed accepts any of the watch/short-link shapes) and falling back
/// to the canonical watch URL for bare IDs.
pub fn fetch_title(youtube_id: &str, original_url: Option<&str>) -> Option<String> {
    let target = original_url
        .map(str::to_string)
        .unwrap_or_else(|| watch_url(youtube_id));

    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .ok()?;

    let resp = match client
        .get(OEMBED_URL)
        .query(&[("format", "json"), ("url", target.as_str())])
        .send()
    {
        Ok(r) => r,
        Err(e) => {
            log::debug!("oEmbed request for {youtube_id} failed: {e}");
            return None;
        }
    };

    if !resp.status().is_success() {
        log::debug!("oEmbed returned HTTP {} for {youtube_id}", resp.status());
        return None;
    }

    let parsed: OembedResponse = match resp.json() {
        Ok(p) => p,
        Err(e) => {
            log::debug!("oEmbed response for {youtube_id} did not parse: {e}");
            return None;
        }
    };

    parsed
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
