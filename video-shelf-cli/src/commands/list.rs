use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use video_shelf_catalog::Catalog;

use super::catalog_path;

/// Run the list command: show the display view, newest first.
pub(crate) fn run_list(root: &Path) {
    let path = catalog_path(root);
    let catalog = match Catalog::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            std::process::exit(1);
        }
    };

    let videos = catalog.videos();
    if videos.is_empty() {
        println!(
            "{}",
            "No videos in the catalog.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    let hidden = catalog.len() - videos.len();
    for video in &videos {
        println!(
            "{}  {} {}",
            video.date,
            video.title.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", video.slug).if_supports_color(Stdout, |t| t.cyan()),
        );
        if !video.tags.is_empty() {
            println!(
                "            tags: {}",
                video.tags.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        if !video.resources.is_empty() {
            let kinds: Vec<&str> = video.resources.iter().map(|r| r.kind.as_str()).collect();
            println!(
                "            resources: {}",
                kinds.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    println!();
    println!("{} video(s)", videos.len());
    if hidden > 0 {
        log::warn!("{hidden} catalog element(s) failed validation and are hidden");
    }
}
