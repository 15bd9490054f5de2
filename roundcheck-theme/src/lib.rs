#![warn(missing_docs)]

//! Themes & styling for roundcheck => See the `roundcheck` crate for more.

/// Contains loading of color schemes from TOML files.
pub mod config;

/// Contains the error types of the theming system.
pub mod error;

/// Contains the [WidgetId](id::WidgetId) for identifying widget types.
pub mod id;

/// Contains the checkbox color scheme and its state resolution.
pub mod scheme;

/// Contains custom serialization helpers for colors.
pub mod serde_color;

/// Contains the [Theme](theme::Theme) trait and stock themes.
pub mod theme;
