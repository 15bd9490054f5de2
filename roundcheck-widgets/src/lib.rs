#![warn(missing_docs)]

//! Widgets for roundcheck UI => See the `roundcheck` crate for more.

/// Contains the [RoundCheckBox](round_checkbox::RoundCheckBox) widget.
pub mod round_checkbox;
