//! Configuration file support for the pre-renderer.
//!
//! Loads an optional `findmyteam.toml`. Every key has a default, so an empty
//! file and a missing default file behave the same.

use std::path::{Path, PathBuf};

use findmyteam_landing::components::DocumentMeta;
use serde::Deserialize;

use crate::error::{RenderError, Result};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "findmyteam.toml";

/// Output path used when neither config nor CLI sets one.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let meta = DocumentMeta::default();
        Self {
            title: meta.title,
            description: meta.description,
            lang: meta.lang,
        }
    }
}

impl From<&SiteConfig> for DocumentMeta {
    fn from(site: &SiteConfig) -> Self {
        DocumentMeta {
            title: site.title.clone(),
            description: site.description.clone(),
            lang: site.lang.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    /// Load config from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RenderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load `findmyteam.toml` from `dir` if present, otherwise defaults.
    pub fn load_default(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| RenderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_default_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RenderConfig::load_default(dir.path()).unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.site.title, "FindMyTeam");
        assert_eq!(config.output.path, PathBuf::from("dist/index.html"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = RenderConfig::load_from_path(&dir.path().join("nope.toml")).unwrap_err();

        assert!(matches!(err, RenderError::ConfigRead { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[site]\ntitle = \"Build together\"\n");
        let config = RenderConfig::load_default(dir.path()).unwrap();

        assert_eq!(config.site.title, "Build together");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[site]
title = "FindMyTeam"
description = "Teams for ideas"
lang = "de"

[output]
path = "public/index.html"
"#,
        );
        let config = RenderConfig::load_from_path(&path).unwrap();

        assert_eq!(config.site.description, "Teams for ideas");
        assert_eq!(config.site.lang, "de");
        assert_eq!(config.output.path, PathBuf::from("public/index.html"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[site]\ntheme = \"dark\"\n");
        let err = RenderConfig::load_from_path(&path).unwrap_err();

        assert!(matches!(err, RenderError::ConfigParse { .. }));
    }

    #[test]
    fn site_maps_to_document_meta() {
        let site = SiteConfig {
            title: "T".into(),
            description: "D".into(),
            lang: "fr".into(),
        };
        let meta = DocumentMeta::from(&site);

        assert_eq!(meta.title, "T");
        assert_eq!(meta.lang, "fr");
    }
}
