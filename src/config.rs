//! Project config (dotgen.yaml) parsing.
//!
//! The config file pins generator settings so repeated runs produce the
//! same document. Command-line flags override it; it overrides defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::{Emitter, Language, DEFAULT_PACKAGE};
use crate::error::{DotgenError, Result};
use crate::generate::GeneratorOptions;
use crate::types::AssetFormat;

/// Config filename looked up in the current directory.
pub const CONFIG_FILENAME: &str = "dotgen.yaml";

/// Generator settings loaded from dotgen.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Canvas edge length.
    pub size: Option<u32>,

    /// Gap between circle and canvas edge.
    pub margin: Option<u32>,

    /// Secondary ICO entry size.
    pub small_size: Option<u32>,

    /// Formats to encode.
    pub formats: Option<Vec<AssetFormat>>,

    /// Language of the generated document.
    pub language: Option<Language>,

    /// Package name for Go output.
    pub package: Option<String>,

    /// Emit state lookup functions.
    pub lookup: Option<bool>,

    /// File to write instead of stdout.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load config from a dotgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DotgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DotgenError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load an explicit config file, or dotgen.yaml in `dir` if it exists.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Generator options with defaults filled in.
    pub fn generator_options(&self) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            size: self.size.unwrap_or(defaults.size),
            margin: self.margin.unwrap_or(defaults.margin),
            small_size: self.small_size.unwrap_or(defaults.small_size),
            formats: self.formats.clone().unwrap_or(defaults.formats),
        }
    }

    /// Emitter with defaults filled in.
    pub fn emitter(&self) -> Result<Emitter> {
        let emitter = Emitter::new(self.language.unwrap_or_default())
            .with_package(self.package.as_deref().unwrap_or(DEFAULT_PACKAGE))
            .with_lookup(self.lookup.unwrap_or(false));
        emitter.validate()?;
        Ok(emitter)
    }

    /// Overlay `other` on top of this config; set fields in `other` win.
    pub fn overlay(self, other: Config) -> Config {
        Config {
            size: other.size.or(self.size),
            margin: other.margin.or(self.margin),
            small_size: other.small_size.or(self.small_size),
            formats: other.formats.or(self.formats),
            language: other.language.or(self.language),
            package: other.package.or(self.package),
            lookup: other.lookup.or(self.lookup),
            output: other.output.or(self.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
size: 48
margin: 6
small_size: 24
formats: [ico, png]
language: go
package: trayicon
lookup: true
output: internal/icon/icon_data.go
"#,
        )
        .unwrap();

        assert_eq!(config.size, Some(48));
        assert_eq!(config.formats, Some(vec![AssetFormat::Ico, AssetFormat::Png]));
        assert_eq!(config.language, Some(Language::Go));
        assert_eq!(config.package.as_deref(), Some("trayicon"));
        assert_eq!(config.output, Some(PathBuf::from("internal/icon/icon_data.go")));

        let options = config.generator_options();
        assert_eq!(options.size, 48);
        assert_eq!(options.margin, 6);
        assert_eq!(options.small_size, 24);

        let emitter = config.emitter().unwrap();
        assert_eq!(emitter.language, Language::Go);
        assert_eq!(emitter.package, "trayicon");
        assert!(emitter.lookup);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator_options(), GeneratorOptions::default());
        assert_eq!(config.emitter().unwrap().language, Language::Rust);
        assert_eq!(config.emitter().unwrap().package, "icon");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("colour: red\n").unwrap_err();
        assert!(matches!(err, DotgenError::Config { .. }));
    }

    #[test]
    fn test_invalid_go_package_rejected() {
        let config = Config::parse("language: go\npackage: foo-bar\n").unwrap();
        let err = config.emitter().unwrap_err();
        assert!(matches!(err, DotgenError::Config { .. }));
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Config::parse("formats: [gif]\n").is_err());
    }

    #[test]
    fn test_overlay_prefers_other() {
        let base = Config {
            size: Some(48),
            language: Some(Language::Go),
            ..Config::default()
        };
        let flags = Config {
            size: Some(24),
            lookup: Some(true),
            ..Config::default()
        };

        let merged = base.overlay(flags);
        assert_eq!(merged.size, Some(24));
        assert_eq!(merged.language, Some(Language::Go));
        assert_eq!(merged.lookup, Some(true));
    }

    #[test]
    fn test_discover_in_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "size: 64\n").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.size, Some(64));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, DotgenError::Io { .. }));
    }
}
