//! video-shelf CLI
//!
//! Command-line interface for maintaining the video resource catalog:
//! append entries from YouTube URLs and publish prepared slide folders.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "video-shelf")]
#[command(about = "Maintain the video resource catalog", long_about = None)]
struct Cli {
    /// Site root containing videos.json and public/resources
    /// (defaults to the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Skip the YouTube title lookup and use placeholder titles
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a stub catalog entry from a YouTube URL or bare video ID
    Add {
        /// YouTube URL (watch/short-link/embed/shorts) or 11-character ID
        source: String,
    },

    /// Ingest a prepared folder of slides and description for a video
    Ingest {
        /// YouTube URL or bare video ID for the new entry
        #[arg(long = "source-url")]
        source_url: String,

        /// Folder containing slides.html, description.md/.txt, tags.txt
        #[arg(long, default_value = "inbox/next")]
        folder: PathBuf,

        /// Call-to-action label (requires --cta-url)
        #[arg(long, requires = "cta_url")]
        cta_label: Option<String>,

        /// Call-to-action link (requires --cta-label)
        #[arg(long, requires = "cta_label")]
        cta_url: Option<String>,

        /// Site base URL used to print the full page link
        #[arg(long)]
        site_base: Option<String>,
    },

    /// List catalog entries, newest first
    List,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let root = cli
        .root
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    match cli.command {
        Commands::Add { source } => {
            commands::add::run_add(&root, &source, cli.offline);
        }
        Commands::Ingest {
            source_url,
            folder,
            cta_label,
            cta_url,
            site_base,
        } => {
            commands::ingest::run_ingest(
                &root,
                &source_url,
                &folder,
                cta_label.zip(cta_url),
                site_base,
                cli.offline,
            );
        }
        Commands::List => {
            commands::list::run_list(&root);
        }
    }
}
