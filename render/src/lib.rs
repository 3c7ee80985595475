//! # findmyteam-render
//!
//! Pre-renders the FindMyTeam landing page to a static HTML document.
//!
//! The page is rendered with the system clock at invocation time, so the
//! footer's "Server time" is the moment the file was produced.

pub mod config;
pub mod error;

use std::path::{Path, PathBuf};

use findmyteam_landing::clock::Clock;
use findmyteam_landing::components::DocumentMeta;
use findmyteam_landing::render_document;

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Stdout,
}

/// Render the page described by `config` and deliver it to `target`.
/// Returns the rendered document.
pub fn prerender(config: &RenderConfig, target: &Target, clock: &impl Clock) -> Result<String> {
    let meta = DocumentMeta::from(&config.site);
    let html = render_document(&meta, clock);

    match target {
        Target::File(path) => {
            write_output(path, &html)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "landing page written");
        }
        Target::Stdout => {
            println!("{html}");
        }
    }
    Ok(html)
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    let to_error = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, html).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use findmyteam_landing::clock::FixedClock;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock::at(2026, 10, 18, 8, 0, 0).unwrap()
    }

    #[test]
    fn writes_document_creating_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist/nested/index.html");

        let html = prerender(&RenderConfig::default(), &Target::File(path.clone()), &clock()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, html);
        assert!(written.contains("Server time: 10/18/2026, 8:00:00 AM"));
    }

    #[test]
    fn uses_site_config_for_metadata() {
        let dir = TempDir::new().unwrap();
        let mut config = RenderConfig::default();
        config.site.title = "Build with FindMyTeam".into();

        let html = prerender(
            &config,
            &Target::File(dir.path().join("index.html")),
            &clock(),
        )
        .unwrap();

        assert!(html.contains("<title>Build with FindMyTeam</title>"));
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        // A regular file cannot be used as a directory.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("index.html");

        let err = prerender(&RenderConfig::default(), &Target::File(path), &clock()).unwrap_err();

        assert!(matches!(err, RenderError::Write { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
