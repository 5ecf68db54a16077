//! Configuration for the filter-tabs pipeline.
//!
//! Parses a `filtertabs.toml` file with serde. All fields have defaults, so
//! an empty file (or no file at all) yields a working configuration.
//!
//! ```toml
//! highlight_color = "#2a6fdb"
//! collapsible_enabled = true
//! collapsible_accent_color = "#17a2b8"
//! debug_mode = true
//! warn_threshold = 15
//! selector_cap = 20
//! ```

use std::path::Path;

use serde::Deserialize;

/// Groups larger than this draw a restructuring warning.
///
/// Policy constant with no derivation from first principles; override via
/// [`FilterTabsConfig::warn_threshold`].
pub const LARGE_GROUP_WARN_THRESHOLD: usize = 15;

/// Hard cap on the selector table size.
///
/// The table grows linearly with the largest group in the build, and an
/// unbounded table is both a stylesheet-size and a maintainability hazard.
/// Override via [`FilterTabsConfig::selector_cap`].
pub const SELECTOR_TABLE_CAP: usize = 20;

/// Fallback highlight color when none is configured or the configured value
/// fails validation.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#007bff";

/// Fallback accent color for collapsible blocks.
pub const DEFAULT_COLLAPSIBLE_ACCENT_COLOR: &str = "#17a2b8";

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "filtertabs.toml";

/// Build configuration for filter-tab rendering.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterTabsConfig {
    /// Accent color emitted as the `--ft-highlight-color` theme property.
    pub highlight_color: String,
    /// Render `::: details` blocks as native collapsible elements.
    pub collapsible_enabled: bool,
    /// Accent color emitted as the `--ft-collapsible-accent-color` property.
    pub collapsible_accent_color: String,
    /// Emit verbose diagnostic events while resolving groups.
    pub debug_mode: bool,
    /// Slot count above which a `LargeGroup` warning is reported.
    pub warn_threshold: usize,
    /// Slot count above which the selector table is capped.
    pub selector_cap: usize,
}

impl Default for FilterTabsConfig {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_owned(),
            collapsible_enabled: true,
            collapsible_accent_color: DEFAULT_COLLAPSIBLE_ACCENT_COLOR.to_owned(),
            debug_mode: false,
            warn_threshold: LARGE_GROUP_WARN_THRESHOLD,
            selector_cap: SELECTOR_TABLE_CAP,
        }
    }
}

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl FilterTabsConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `filtertabs.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
