//! Configuration module for tillr
//!
//! Manages the user's preferences: database URL, additional items, query
//! syntax, paging and key bindings. Preferences are stored as TOML in the
//! user's config directory (`~/.config/tillr/config.toml` on Linux).
//!
//! Loading is forgiving. Missing fields take their defaults, and
//! [`TillrConfig::load_or_default`] falls back to defaults entirely when the
//! file cannot be read.

use crate::keybinds::KeyBindings;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted page size
pub const MIN_ITEMS_PER_PAGE: usize = 1;
/// Largest accepted page size
pub const MAX_ITEMS_PER_PAGE: usize = 20;

/// Keys accepted by [`TillrConfig::get`] and [`TillrConfig::set`]
pub const KEYS: &[&str] = &[
    "db_url",
    "user_items",
    "items_per_page",
    "default_query",
    "tokenize_search",
    "query_separator",
    "organic_modifier",
    "item_tag_prefix",
    "keybinds.reset_query",
    "keybinds.nav_back",
    "keybinds.nav_left",
    "keybinds.nav_right",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TillrConfig {
    /// URL of the remote item database
    pub db_url: String,

    /// Additional `name: code` items, one per line
    pub user_items: String,

    /// Number of search results shown per page
    pub items_per_page: usize,

    /// Query shown on start and after a reset
    pub default_query: String,

    /// Match query words individually instead of the whole string
    pub tokenize_search: bool,

    /// Separator used to chain several queries
    pub query_separator: String,

    /// Suffix asking for organic pricing
    pub organic_modifier: String,

    /// Prefix that turns a query into a tag filter
    pub item_tag_prefix: String,

    /// Key bindings for the lookup view
    pub keybinds: KeyBindings,
}

impl Default for TillrConfig {
    fn default() -> Self {
        Self {
            db_url: "https://db1.gianteagle.turtlemay.us/".to_string(),
            user_items: String::new(),
            items_per_page: 4,
            default_query: "stamps".to_string(),
            tokenize_search: false,
            query_separator: ";".to_string(),
            organic_modifier: "!".to_string(),
            item_tag_prefix: "tag:".to_string(),
            keybinds: KeyBindings::default(),
        }
    }
}

impl TillrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tillr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize::<Self>().map(Self::normalized)
    }

    /// Load configuration, falling back to defaults on any failure
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default preferences");
            Self::default()
        })
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// See [`TillrConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Clamp values into their accepted ranges
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.items_per_page = self.items_per_page.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE);
        self
    }

    /// Restore every preference to its default
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Read a preference by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "db_url" => self.db_url.clone(),
            "user_items" => self.user_items.clone(),
            "items_per_page" => self.items_per_page.to_string(),
            "default_query" => self.default_query.clone(),
            "tokenize_search" => self.tokenize_search.to_string(),
            "query_separator" => self.query_separator.clone(),
            "organic_modifier" => self.organic_modifier.clone(),
            "item_tag_prefix" => self.item_tag_prefix.clone(),
            "keybinds.reset_query" => self.keybinds.reset_query.clone(),
            "keybinds.nav_back" => self.keybinds.nav_back.clone(),
            "keybinds.nav_left" => self.keybinds.nav_left.clone(),
            "keybinds.nav_right" => self.keybinds.nav_right.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a preference by key
    ///
    /// `items_per_page` is clamped to its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "db_url" => self.db_url = value.to_string(),
            "user_items" => self.user_items = value.to_string(),
            "items_per_page" => {
                let n: usize = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid items_per_page: '{value}'"))
                })?;
                self.items_per_page = n.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE);
            }
            "default_query" => self.default_query = value.to_string(),
            "tokenize_search" => {
                self.tokenize_search = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid tokenize_search: '{value}' (use true or false)"
                    ))
                })?;
            }
            "query_separator" => self.query_separator = value.to_string(),
            "organic_modifier" => self.organic_modifier = value.to_string(),
            "item_tag_prefix" => self.item_tag_prefix = value.to_string(),
            "keybinds.reset_query" => self.keybinds.reset_query = value.to_string(),
            "keybinds.nav_back" => self.keybinds.nav_back = value.to_string(),
            "keybinds.nav_left" => self.keybinds.nav_left = value.to_string(),
            "keybinds.nav_right" => self.keybinds.nav_right = value.to_string(),
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
