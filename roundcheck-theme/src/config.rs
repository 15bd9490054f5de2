//! Loading color schemes from TOML files.
//!
//! A scheme file holds the five checkbox colors as hex strings; missing
//! fields fall back to the built-in defaults:
//!
//! ```toml
//! selected = "#24c71f"
//! disabled_selected = "#dcdbdc"
//! disabled_unselected = "#00000000"
//! tick = "#ffffff"
//! border = "#353d35"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};
use crate::scheme::RoundCheckBoxColors;

/// On-disk description of a [RoundCheckBoxColors] scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Fill color of an enabled checkbox.
    #[serde(with = "crate::serde_color")]
    pub selected: Color,
    /// Fill color of a disabled, checked checkbox.
    #[serde(with = "crate::serde_color")]
    pub disabled_selected: Color,
    /// Fill color of a disabled, unchecked checkbox.
    #[serde(with = "crate::serde_color")]
    pub disabled_unselected: Color,
    /// Color of the checkmark.
    #[serde(with = "crate::serde_color")]
    pub tick: Color,
    /// Color of the border ring.
    #[serde(with = "crate::serde_color")]
    pub border: Color,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        RoundCheckBoxColors::default().into()
    }
}

impl SchemeConfig {
    /// Load a scheme configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::SchemeFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw).map_err(|err| match err {
            ThemeError::SchemeParseError { details, .. } => ThemeError::SchemeParseError {
                path: path.to_path_buf(),
                details,
            },
            other => other,
        })?;

        log::debug!("loaded checkbox scheme from {:?}", path);
        Ok(config)
    }

    /// Parse a scheme configuration from a TOML string.
    pub fn from_toml(raw: &str) -> ThemeResult<Self> {
        toml::from_str(raw).map_err(|err| ThemeError::SchemeParseError {
            path: Default::default(),
            details: err.to_string(),
        })
    }
}

impl From<SchemeConfig> for RoundCheckBoxColors {
    fn from(config: SchemeConfig) -> Self {
        RoundCheckBoxColors::new(
            config.selected,
            config.disabled_selected,
            config.disabled_unselected,
            config.tick,
            config.border,
        )
    }
}

impl From<RoundCheckBoxColors> for SchemeConfig {
    fn from(colors: RoundCheckBoxColors) -> Self {
        Self {
            selected: colors.selected_color(),
            disabled_selected: colors.disabled_selected_color(),
            disabled_unselected: colors.disabled_unselected_color(),
            tick: colors.tick_color(),
            border: colors.border_color(),
        }
    }
}
