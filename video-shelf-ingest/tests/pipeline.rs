use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use video_shelf_catalog::{CallToAction, Catalog, ResourceKind};
use video_shelf_ingest::{
    AddOptions, FolderOptions, IngestError, add_video, ingest_folder, locate_sources,
};

const ID: &str = "dQw4w9WgXcQ";

fn site_root() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let catalog_path = tmp.path().join("videos.json");
    fs::write(&catalog_path, "[]\n").unwrap();
    let resources_dir = tmp.path().join("public").join("resources");
    fs::create_dir_all(&resources_dir).unwrap();
    (tmp, catalog_path, resources_dir)
}

fn offline_add(catalog_path: &Path, resources_dir: &Path, source: &str) -> AddOptions {
    AddOptions {
        catalog_path: catalog_path.to_path_buf(),
        resources_dir: resources_dir.to_path_buf(),
        source: source.to_string(),
        skip_lookup: true,
    }
}

#[test]
fn add_to_empty_catalog_end_to_end() {
    let (_tmp, catalog_path, resources_dir) = site_root();

    let outcome = add_video(&offline_add(&catalog_path, &resources_dir, ID)).unwrap();
    assert_eq!(outcome.youtube_id, ID);
    assert_eq!(outcome.title, "New Video (dQw4w9WgXcQ)");
    assert_eq!(outcome.slug, "video-dqw4w9wgxcq");
    assert_eq!(outcome.date, chrono::Utc::now().format("%Y-%m-%d").to_string());

    let catalog = Catalog::load(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 1);
    let videos = catalog.videos();
    assert_eq!(videos[0].youtube_id, ID);
    assert_eq!(videos[0].slug, "video-dqw4w9wgxcq");

    // The per-slug resource folder exists and is tracked.
    assert!(resources_dir.join("video-dqw4w9wgxcq").join(".gitkeep").is_file());
}

#[test]
fn add_accepts_watch_urls() {
    let (_tmp, catalog_path, resources_dir) = site_root();
    let url = format!("https://www.youtube.com/watch?v={ID}");
    let outcome = add_video(&offline_add(&catalog_path, &resources_dir, &url)).unwrap();
    assert_eq!(outcome.youtube_id, ID);
}

#[test]
fn duplicate_id_is_rejected_and_catalog_untouched() {
    let (_tmp, catalog_path, resources_dir) = site_root();

    add_video(&offline_add(&catalog_path, &resources_dir, ID)).unwrap();
    let before = fs::read_to_string(&catalog_path).unwrap();

    match add_video(&offline_add(&catalog_path, &resources_dir, ID)) {
        Err(IngestError::DuplicateId(id)) => assert_eq!(id, ID),
        other => panic!("expected DuplicateId, got {other:?}"),
    }

    // Exactly one successful ingestion, exactly one record.
    let after = fs::read_to_string(&catalog_path).unwrap();
    assert_eq!(before, after);
    assert_eq!(Catalog::load(&catalog_path).unwrap().len(), 1);
}

#[test]
fn unrecognized_source_is_rejected() {
    let (_tmp, catalog_path, resources_dir) = site_root();
    match add_video(&offline_add(&catalog_path, &resources_dir, "https://example.com/watch?v=dQw4w9WgXcQ")) {
        Err(IngestError::UnrecognizedSource(_)) => {}
        other => panic!("expected UnrecognizedSource, got {other:?}"),
    }
    assert!(Catalog::load(&catalog_path).unwrap().is_empty());
}

#[test]
fn second_add_resolves_slug_collision() {
    let (_tmp, catalog_path, resources_dir) = site_root();

    // Seed a record already holding the fallback slug for a different ID.
    fs::write(
        &catalog_path,
        r#"[
  { "title": "Old", "slug": "video-dqw4w9wgxcq", "youtubeId": "aaaaaaaaaaa", "date": "2025-01-01", "description": "" }
]
"#,
    )
    .unwrap();

    let outcome = add_video(&offline_add(&catalog_path, &resources_dir, ID)).unwrap();
    assert_eq!(outcome.slug, "video-dqw4w9wgxcq-2");
}

#[test]
#[cfg(unix)]
fn ingest_folder_end_to_end_with_stub_renderer() {
    use std::os::unix::fs::PermissionsExt;

    let (tmp, catalog_path, resources_dir) = site_root();

    // Stand-in for the browser binary: pick out the --print-to-pdf
    // target and write a dummy file there.
    let stub = tmp.path().join("render-stub.sh");
    fs::write(
        &stub,
        "#!/bin/sh\n\
         for arg in \"$@\"; do\n\
           case \"$arg\" in\n\
             --print-to-pdf=*) out=\"${arg#--print-to-pdf=}\" ;;\n\
           esac\n\
         done\n\
         printf 'stub' > \"$out\"\n",
    )
    .unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    // SAFETY: single-threaded with respect to this variable; no other
    // test in this binary reads or writes it.
    unsafe { std::env::set_var("VIDEO_SHELF_CHROME", &stub) };

    let folder = tmp.path().join("inbox").join("next");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("slides.html"), "<html><body>slides</body></html>").unwrap();
    fs::write(
        folder.join("description.md"),
        "A deep dive\r\ninto catalog   pipelines.",
    )
    .unwrap();
    fs::write(folder.join("tags.txt"), "Rust, Static Sites\nAgents").unwrap();

    let outcome = ingest_folder(&FolderOptions {
        catalog_path: catalog_path.clone(),
        resources_dir: resources_dir.clone(),
        folder,
        source: format!("https://youtu.be/{ID}"),
        cta: Some(CallToAction {
            label: "Join the course".to_string(),
            url: "https://example.com/course".to_string(),
        }),
        skip_lookup: true,
    })
    .unwrap();

    assert_eq!(outcome.youtube_id, ID);
    assert_eq!(outcome.slug, "video-dqw4w9wgxcq");
    assert_eq!(outcome.page_path, "/videos/video-dqw4w9wgxcq/");

    // All four artifacts were published, the PDF by the renderer.
    let entry_dir = resources_dir.join("video-dqw4w9wgxcq");
    assert!(entry_dir.join("slides.html").is_file());
    assert!(entry_dir.join("slides.pdf").is_file());
    assert!(entry_dir.join("description.md").is_file());
    assert!(entry_dir.join("description.txt").is_file());

    let catalog = Catalog::load(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 1);
    let videos = catalog.videos();
    let record = &videos[0];

    assert_eq!(record.title, "New Video (dQw4w9WgXcQ)");
    assert_eq!(record.description, "A deep dive into catalog pipelines.");
    assert_eq!(
        record.description_file.as_deref(),
        Some("/resources/video-dqw4w9wgxcq/description.md"),
    );
    assert_eq!(record.tags, vec!["rust", "static-sites", "agents"]);

    let kinds_and_urls: Vec<(ResourceKind, &str)> = record
        .resources
        .iter()
        .map(|r| (r.kind, r.url.as_str()))
        .collect();
    assert_eq!(
        kinds_and_urls,
        vec![
            (ResourceKind::Html, "/resources/video-dqw4w9wgxcq/slides.html"),
            (ResourceKind::Pdf, "/resources/video-dqw4w9wgxcq/slides.pdf"),
            (ResourceKind::Text, "/resources/video-dqw4w9wgxcq/description.txt"),
        ],
    );

    let cta = record.primary_cta.as_ref().unwrap();
    assert_eq!(cta.label, "Join the course");
    assert_eq!(cta.url, "https://example.com/course");
}

#[test]
fn locate_sources_requires_slides() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("description.md"), "text").unwrap();
    match locate_sources(tmp.path()) {
        Err(IngestError::MissingArtifact { label, .. }) => assert_eq!(label, "slides.html"),
        other => panic!("expected MissingArtifact, got {other:?}"),
    }
}

#[test]
fn locate_sources_requires_some_description() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("slides.html"), "<html></html>").unwrap();
    match locate_sources(tmp.path()) {
        Err(IngestError::MissingArtifact { label, .. }) => {
            assert_eq!(label, "description.md or description.txt");
        }
        other => panic!("expected MissingArtifact, got {other:?}"),
    }
}

#[test]
fn locate_sources_prefers_markdown_description() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("slides.html"), "<html></html>").unwrap();
    fs::write(tmp.path().join("description.md"), "md").unwrap();
    fs::write(tmp.path().join("description.txt"), "txt").unwrap();
    fs::write(tmp.path().join("tags.txt"), "rust").unwrap();

    let sources = locate_sources(tmp.path()).unwrap();
    assert!(sources.description.ends_with("description.md"));
    assert!(sources.tags.is_some());
}

#[test]
fn locate_sources_falls_back_to_plain_text() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("slides.html"), "<html></html>").unwrap();
    fs::write(tmp.path().join("description.txt"), "txt").unwrap();

    let sources = locate_sources(tmp.path()).unwrap();
    assert!(sources.description.ends_with("description.txt"));
    assert!(sources.tags.is_none());
}
