use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use video_shelf_ingest::{AddOptions, add_video};

use super::{catalog_path, resources_dir};

/// Run the add command.
pub(crate) fn run_add(root: &Path, source: &str, offline: bool) {
    let opts = AddOptions {
        catalog_path: catalog_path(root),
        resources_dir: resources_dir(root),
        source: source.to_string(),
        skip_lookup: offline,
    };

    let outcome = match add_video(&opts) {
        Ok(o) => o,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            std::process::exit(1);
        }
    };

    println!(
        "{} Added video entry",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    println!("- youtubeId: {}", outcome.youtube_id);
    println!(
        "- slug:      {}",
        outcome.slug.if_supports_color(Stdout, |t| t.cyan()),
    );
    println!("- date:      {}", outcome.date);
    println!("- videos:    {}", opts.catalog_path.display());
    println!("- resources: {}/", outcome.entry_dir.display());
    println!();
    println!("Next: add files under the resources folder and update description/tags if needed.");
}
