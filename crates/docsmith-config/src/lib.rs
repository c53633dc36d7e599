//! Configuration management for docsmith.
//!
//! Parses `docsmith.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Relative paths in
//! the file are resolved against the config file's directory.
//!
//! ```toml
//! [docs]
//! source_dir = "src/content/docs"
//!
//! [snippets]
//! base_dir = "src/content/docs"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`]; non-`None`
//! values override the loaded configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsmith.toml";

/// Default docs source directory relative to the config location.
const DEFAULT_SOURCE_DIR: &str = "src/content/docs";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override snippet base directory.
    pub snippet_base_dir: Option<PathBuf>,
}

/// Raw configuration as parsed from TOML (paths as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    docs: DocsSection,
    snippets: SnippetsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsSection {
    source_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnippetsSection {
    base_dir: Option<String>,
}

/// Resolved application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Docs source directory (content root).
    pub source_dir: PathBuf,
    /// Base directory for snippet reference resolution.
    ///
    /// Defaults to the content root when the config file doesn't set one.
    pub snippet_base_dir: PathBuf,
    /// Path to the config file, when one was loaded.
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with optional explicit path and CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `docsmith.toml` in the current directory and parents, falling back
    /// to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or the
    /// file cannot be read or parsed.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_base(&std::env::current_dir().unwrap_or_default())
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Create a default config with paths relative to `base`.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        let source_dir = base.join(DEFAULT_SOURCE_DIR);
        Self {
            snippet_base_dir: source_dir.clone(),
            source_dir,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: ConfigFile = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let source_dir = config_dir.join(
            raw.docs
                .source_dir
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE_DIR),
        );
        let snippet_base_dir = raw
            .snippets
            .base_dir
            .as_deref()
            .map_or_else(|| source_dir.clone(), |dir| config_dir.join(dir));

        Ok(Self {
            source_dir,
            snippet_base_dir,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.source_dir.clone_from(source_dir);
        }
        if let Some(base_dir) = &settings.snippet_base_dir {
            self.snippet_base_dir.clone_from(base_dir);
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
