//! HTML-to-PDF rendering via a headless Chromium subprocess.
//!
//! Slides arrive as self-contained HTML; the fixed-layout artifact is
//! produced by whatever Chromium-family browser is installed. The
//! binary can be pinned with `VIDEO_SHELF_CHROME`; otherwise the usual
//! names are tried in order.

use std::path::Path;
use std::process::Command;

use crate::error::IngestError;

const CHROME_ENV: &str = "VIDEO_SHELF_CHROME";

const CHROME_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

/// Render an HTML file to a PDF at `pdf_path`.
pub fn render_pdf(html_path: &Path, pdf_path: &Path) -> Result<(), IngestError> {
    let html_abs = html_path
        .canonicalize()
        .map_err(|e| IngestError::io(html_path, e))?;

    if let Ok(bin) = std::env::var(CHROME_ENV) {
        return run_chrome(&bin, &html_abs, pdf_path);
    }

    let mut last_err = None;
    for bin in CHROME_CANDIDATES {
        match run_chrome(bin, &html_abs, pdf_path) {
            Ok(()) => return Ok(()),
            // Binary not present: try the next candidate.
            Err(IngestError::Render(msg)) if msg.contains("not found") => {
                last_err = Some(IngestError::Render(msg));
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        IngestError::Render(format!(
            "no Chromium-family browser found (set {CHROME_ENV} to point at one)"
        ))
    }))
}

fn run_chrome(bin: &str, html_abs: &Path, pdf_path: &Path) -> Result<(), IngestError> {
    let output = Command::new(bin)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-pdf-header-footer")
        .arg(format!("--print-to-pdf={}", pdf_path.display()))
        .arg(format!("file://{}", html_abs.display()))
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::Render(format!("browser binary not found: {bin}"))
            } else {
                IngestError::Render(format!("failed to launch {bin}: {e}"))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::Render(format!(
            "{bin} exited with {}: {}",
            output.status,
            stderr.trim(),
        )));
    }
    if !pdf_path.exists() {
        return Err(IngestError::Render(format!(
            "{bin} reported success but produced no PDF at {}",
            pdf_path.display(),
        )));
    }
    Ok(())
}
