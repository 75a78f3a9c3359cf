use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use video_shelf_catalog::CallToAction;
use video_shelf_ingest::{FolderOptions, ingest_folder};

use super::{catalog_path, resources_dir};

/// Run the ingest command.
pub(crate) fn run_ingest(
    root: &Path,
    source_url: &str,
    folder: &Path,
    cta: Option<(String, String)>,
    site_base: Option<String>,
    offline: bool,
) {
    let cta = cta.map(|(label, url)| CallToAction { label, url });
    let cta_echo = cta.clone();

    let opts = FolderOptions {
        catalog_path: catalog_path(root),
        resources_dir: resources_dir(root),
        folder: root.join(folder),
        source: source_url.to_string(),
        cta,
        skip_lookup: offline,
    };

    let outcome = match ingest_folder(&opts) {
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

    let page = match &site_base {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), outcome.page_path),
        None => outcome.page_path.clone(),
    };

    println!(
        "{} Ingested video",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    println!("- title: {}", outcome.title);
    println!(
        "- slug:  {}",
        outcome.slug.if_supports_color(Stdout, |t| t.cyan()),
    );
    println!("- date:  {}", outcome.date);
    println!("- page:  {}", page);
    println!("- files: {}/", outcome.entry_dir.display());
    if let Some(cta) = cta_echo {
        println!("- CTA:   {} -> {}", cta.label, cta.url);
    }
    println!();
    println!("Ingest complete. You may now replace the folder contents for the next video.");
}
