//! Configuration management for fuzzmenu.
//!
//! Supports layered configuration: defaults → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub menu: MenuSectionConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl MenuConfig {
    /// Load configuration with hierarchy: defaults → user → env
    pub fn load() -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. User config (~/.config/fuzzmenu/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "fuzzmenu", "fuzzmenu") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 3. Environment variables (FUZZMENU__*)
        builder = builder.add_source(
            Environment::with_prefix("FUZZMENU")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// `[menu]` section: filter prompt and item drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSectionConfig {
    /// Glyph shown left of the filter buffer
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Match labels ignoring case
    #[serde(default)]
    pub case_insensitive: bool,
    /// Prefix drawn before the current item
    #[serde(default)]
    pub highlight_symbol: String,
}

impl Default for MenuSectionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            case_insensitive: false,
            highlight_symbol: String::new(),
        }
    }
}

fn default_prompt() -> String {
    "/".to_string()
}

/// Key binding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Enable vim-style navigation (j/k) in menus without a filter
    #[serde(default = "default_true")]
    pub vim_navigation: bool,
    /// Space selects the current item like Enter
    #[serde(default = "default_true")]
    pub space_selects: bool,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            vim_navigation: true,
            space_selects: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Colour names for the menu styles, parsed with ratatui's `Color` syntax.
/// An empty name inherits the region colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_focused")]
    pub focused: String,
    #[serde(default = "default_unfocused")]
    pub unfocused: String,
    #[serde(default = "default_current")]
    pub current: String,
    #[serde(default = "default_item")]
    pub item: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            focused: default_focused(),
            unfocused: default_unfocused(),
            current: default_current(),
            item: default_item(),
        }
    }
}

fn default_focused() -> String {
    "white".to_string()
}

fn default_unfocused() -> String {
    "gray".to_string()
}

fn default_current() -> String {
    "cyan".to_string()
}

fn default_item() -> String {
    String::new()
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}
