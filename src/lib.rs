#![warn(missing_docs)]

//! A circular checkbox widget with an iris-reveal animation, drawn with vello.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use roundcheck_core as core;
pub use roundcheck_theme as theme;
pub use roundcheck_widgets as widgets;

/// A "prelude" for users of the roundcheck toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to embed the widget into a host screen.
///
/// ```rust
/// use roundcheck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::animation::{Easing, Interpolate, Tween};
    pub use crate::core::app::info::AppInfo;
    pub use crate::core::app::update::Update;
    pub use crate::core::layout::*;
    pub use crate::core::semantics::SemanticsNode;
    pub use crate::core::signal::{fixed::FixedSignal, state::StateSignal, *};
    pub use crate::core::vgi::vello_vg::VelloGraphics;
    pub use crate::core::vgi::Graphics;
    pub use crate::core::widget::{Widget, WidgetLayoutExt};

    // Theme
    pub use crate::theme::scheme::RoundCheckBoxColors;
    pub use crate::theme::theme::{LightTheme, Theme, ThemeProperty};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use crate::core::vg::*;

    // Widgets
    pub use crate::widgets::round_checkbox::{RoundCheckBox, RoundCheckBoxGeometry};
}
