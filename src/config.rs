//! Configuration management for synthdocs using the prefer crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::typeface::{DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT};
use crate::sampling::DateRange;
use crate::services::TierCounts;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Output root. Images go under `{output_dir}/documents`, manifests at
    /// the top level.
    pub output_dir: PathBuf,
    /// Seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub font_regular: PathBuf,
    pub font_bold: PathBuf,
    pub dates: DateRange,
    /// Merge `manifest.json` when linking scenarios.
    pub merge_primary: bool,
    /// Per-category count overrides, keyed by category key.
    pub plan: BTreeMap<String, TierCounts>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
            font_regular: PathBuf::from(DEFAULT_REGULAR_FONT),
            font_bold: PathBuf::from(DEFAULT_BOLD_FONT),
            dates: DateRange::default(),
            merge_primary: true,
            plan: BTreeMap::new(),
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output root directory.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "target")]
    pub output_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_regular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_bold: Option<String>,
    /// First date documents may carry (ISO `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<NaiveDate>,
    /// Last date documents may carry (ISO `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_primary: Option<bool>,
    /// Category key -> tier counts.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plan: BTreeMap<String, TierCounts>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers synthdocs config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("synthdocs").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => match Self::load_from_path(path).await {
                    Ok(config) => config,
                    Err(err) => {
                        tracing::warn!("Ignoring discovered config: {}", err);
                        Self::default()
                    }
                },
                None => Self::default(),
            },
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// The format follows the extension: TOML, YAML, anything else is JSON.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parsed = match ext {
            "toml" => toml::from_str(contents).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            _ => serde_json::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// Paths starting with ~ are expanded.
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref output_dir) = self.output_dir {
            settings.output_dir = self.resolve_path(output_dir, base_dir);
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(ref font) = self.font_regular {
            settings.font_regular = self.resolve_path(font, base_dir);
        }
        if let Some(ref font) = self.font_bold {
            settings.font_bold = self.resolve_path(font, base_dir);
        }
        if self.date_start.is_some() || self.date_end.is_some() {
            let start = self.date_start.unwrap_or(settings.dates.start);
            let end = self.date_end.unwrap_or(settings.dates.end);
            settings.dates = DateRange::new(start, end);
        }
        if let Some(merge) = self.merge_primary {
            settings.merge_primary = merge;
        }
        for (key, counts) in &self.plan {
            settings.plan.insert(key.clone(), *counts);
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Output root (--target flag).
    pub target: Option<PathBuf>,
    /// Seed from the command line or `SYNTHDOCS_SEED`.
    pub seed: Option<u64>,
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = config.base_dir().unwrap_or_else(|| cwd.clone());

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(target) = options.target {
        settings.output_dir = if target.is_absolute() {
            target
        } else {
            cwd.join(target)
        };
    }
    if let Some(seed) = options.seed {
        tracing::debug!("Using seed {} from command line", seed);
        settings.seed = Some(seed);
    }

    Ok((settings, config))
}
