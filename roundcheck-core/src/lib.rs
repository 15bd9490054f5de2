#![warn(missing_docs)]

//! Core library for roundcheck => See the `roundcheck` crate.
//!
//! Contains the widget trait, per-frame input plumbing, reactive signals,
//! layout types and the vector graphics interface.

pub use vello as vg;

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::event::*;
    pub use winit::window::*;
}

/// Contains per-frame app plumbing shared by all widgets.
pub mod app;

/// Contains retargetable value animation sampled against a monotonic clock.
pub mod animation;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains the [reference::Ref] for representing a reference to a value.
pub mod reference;

/// Contains the accessibility description of widgets.
pub mod semantics;

/// Contains the signal system for reactive programming.
pub mod signal;

/// Contains the core widget functionalities.
pub mod widget;

/// Contains the vector graphics interface abstraction.
pub mod vgi;
