//! Configuration file handling.
//!
//! Settings live in `<config_dir>/glen/config.toml`. Every field has a
//! default, so a missing file or a partial file is valid.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ansi::ColorName;
use crate::theme::{parse_hex, Palette};

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown palette color '{0}'")]
    UnknownColor(String),

    #[error("Invalid value '{value}' for palette color {name} (expected #rrggbb)")]
    InvalidColor { name: String, value: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub viewer: ViewerConfig,
    /// Color name to `#rrggbb` overrides
    pub palette: BTreeMap<String, String>,
}

/// Settings for invoking the checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Binary name or path
    pub binary: String,
    /// Arguments prepended to every run
    pub default_args: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            binary: "len".to_string(),
            default_args: Vec::new(),
        }
    }
}

/// Settings for the scrollable viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lines moved per arrow key press
    pub scroll_step: u16,
    /// Whether the status line is shown under the text
    pub show_status: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scroll_step: 1,
            show_status: true,
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("glen").join("config.toml"))
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        default_path().ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location. A missing file, or no config
    /// directory at all, yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(default_path().as_deref())
    }

    /// Load from `path` when there is one, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                warn!("no config directory found, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        // Surface bad colors at load time rather than when rendering.
        config.palette()?;
        Ok(config)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the display palette with overrides applied.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut palette = Palette::default();
        for (name, value) in &self.palette {
            let color =
                ColorName::from_name(name).ok_or_else(|| ConfigError::UnknownColor(name.clone()))?;
            let rgb = parse_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                name: name.clone(),
                value: value.clone(),
            })?;
            palette.set(color, rgb);
        }
        Ok(palette)
    }

    /// Palette with overrides, falling back to defaults on invalid entries.
    pub fn palette_or_default(&self) -> Palette {
        self.palette().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring palette overrides");
            Palette::default()
        })
    }
}
