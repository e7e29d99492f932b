// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[display]` - Reveal animations, scroll behavior, ambient stars
//! - `[network]` - Image download timeout and cache size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `RENDER_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use render_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! assert!(config.network.timeout().as_secs() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::state::visibility::RootMargin;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// How the "back to top" action moves the page.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "es", "en-US").
    #[serde(default)]
    pub language: Option<String>,
}

/// Page presentation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether sections fade in when first scrolled into view.
    #[serde(default = "default_true")]
    pub reveal_animations: bool,

    /// Margin applied to the viewport edges for the reveal test, written
    /// like a CSS root margin (`"-50px"`, `"10%"`).
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin: String,

    /// Behavior of the footer "back to top" action.
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,

    /// Whether the twinkling star background is drawn.
    #[serde(default = "default_true")]
    pub ambient_stars: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_animations: true,
            reveal_margin: default_reveal_margin(),
            scroll_behavior: ScrollBehavior::default(),
            ambient_stars: true,
        }
    }
}

impl DisplayConfig {
    /// Parsed reveal margin, clamped to the supported range.
    ///
    /// Unparseable values fall back to the default margin.
    #[must_use]
    pub fn root_margin(&self) -> RootMargin {
        match self.reveal_margin.parse::<RootMargin>() {
            Ok(margin) => margin.clamped(MIN_REVEAL_MARGIN_PX, MAX_REVEAL_MARGIN_PX),
            Err(err) => {
                tracing::warn!(value = %self.reveal_margin, %err, "ignoring invalid reveal margin");
                RootMargin::Pixels(DEFAULT_REVEAL_MARGIN_PX)
            }
        }
    }
}

/// Remote image fetching settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,

    /// Decoded-image cache budget in megabytes.
    #[serde(default = "default_cache_mb")]
    pub cache_mb: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_NETWORK_TIMEOUT_SECS,
            cache_mb: DEFAULT_CACHE_MB,
        }
    }
}

impl NetworkConfig {
    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .clamp(MIN_NETWORK_TIMEOUT_SECS, MAX_NETWORK_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Cache budget in bytes, clamped to the supported range.
    #[must_use]
    pub fn cache_bytes(&self) -> usize {
        let mb = self.cache_mb.clamp(MIN_CACHE_MB, MAX_CACHE_MB);
        (mb as usize) * 1024 * 1024
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_reveal_margin() -> String {
    format!("{DEFAULT_REVEAL_MARGIN_PX}px")
}

fn default_timeout_secs() -> u32 {
    DEFAULT_NETWORK_TIMEOUT_SECS
}

fn default_cache_mb() -> u32 {
    DEFAULT_CACHE_MB
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid configuration, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
