//! Per-frame app plumbing shared by all widgets.

/// Contains the application information structure.
pub mod info;

/// Contains the update mode bitflag.
pub mod update;
