//! Configuration management for navmenu.
//!
//! Parses `menu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The `[render]`
//! section holds the global default render options that every menu is
//! rendered on top of.
//!
//! ```toml
//! [render]
//! list_element = "ul"
//! item_element = "li"
//! max_depth = 0          # 0 = unlimited
//! whitespace = "pretty"  # or "compact"
//!
//! [render.list_attributes]
//! class = "nav"
//! ```

use std::path::{Path, PathBuf};

use navmenu_tree::{Attributes, OptionsPatch, RenderOptions, Whitespace};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "menu.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default render options, layered over the built-in defaults.
    pub render: OptionsPatch,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error, including values of the wrong type.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `menu.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// `overrides` are applied after loading and take precedence over file
    /// values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting options are invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&OptionsPatch>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered menu config");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(overrides) = overrides {
            config.render.merge(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or mistyped values and
    /// `ConfigError::Validation` for invalid option values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in current directory and parents.
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if an element name is not a valid tag
    /// or an attribute name is not a valid attribute name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults()
            .validate()
            .map_err(|e| ConfigError::Validation(format!("render: {e}")))
    }

    /// Resolved default render options.
    #[must_use]
    pub fn defaults(&self) -> RenderOptions {
        RenderOptions::default().merged(&self.render)
    }

    /// Look up one resolved default option by key.
    ///
    /// Returns `None` for unknown keys.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<toml::Value> {
        let defaults = self.defaults();
        let value = match key {
            "list_element" => toml::Value::String(defaults.list_element),
            "item_element" => toml::Value::String(defaults.item_element),
            "max_depth" => {
                toml::Value::Integer(i64::try_from(defaults.max_depth).unwrap_or(i64::MAX))
            }
            "whitespace" => toml::Value::String(
                match defaults.whitespace {
                    Whitespace::Pretty => "pretty",
                    Whitespace::Compact => "compact",
                }
                .to_owned(),
            ),
            "list_attributes" => attributes_value(&defaults.list_attributes),
            "item_attributes" => attributes_value(&defaults.item_attributes),
            "link_attributes" => attributes_value(&defaults.link_attributes),
            _ => return None,
        };
        Some(value)
    }
}

fn attributes_value(attributes: &Attributes) -> toml::Value {
    toml::Value::Table(
        attributes
            .iter()
            .map(|(k, v)| (k.to_owned(), toml::Value::String(v.to_owned())))
            .collect(),
    )
}
