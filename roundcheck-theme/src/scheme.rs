//! The checkbox color scheme and its state resolution.

use vello::peniko::Color;

/// Solid colors used to draw a round checkbox in its different states.
///
/// Two schemes are equal iff all five colors are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundCheckBoxColors {
    selected: Color,
    disabled_selected: Color,
    disabled_unselected: Color,
    tick: Color,
    border: Color,
}

impl RoundCheckBoxColors {
    /// Create a scheme from its five colors.
    pub fn new(
        selected: Color,
        disabled_selected: Color,
        disabled_unselected: Color,
        tick: Color,
        border: Color,
    ) -> Self {
        Self {
            selected,
            disabled_selected,
            disabled_unselected,
            tick,
            border,
        }
    }

    /// Resolve the fill color for the given state.
    ///
    /// | enabled | checked | fill                  |
    /// |---------|---------|-----------------------|
    /// | true    | true    | `selected`            |
    /// | true    | false   | `selected`            |
    /// | false   | true    | `disabled_selected`   |
    /// | false   | false   | `disabled_unselected` |
    ///
    /// The enabled-unchecked case reuses `selected` on purpose: when
    /// enabled, checked and unchecked are told apart by the reveal mask
    /// alone, not by a fill color change.
    pub fn fill_color(&self, enabled: bool, checked: bool) -> Color {
        match (enabled, checked) {
            (true, true) => self.selected,
            (true, false) => self.selected,
            (false, true) => self.disabled_selected,
            (false, false) => self.disabled_unselected,
        }
    }

    /// The color of the checkmark, unaffected by state.
    pub fn tick_color(&self) -> Color {
        self.tick
    }

    /// The color of the border ring, unaffected by state.
    pub fn border_color(&self) -> Color {
        self.border
    }

    /// The fill color of an enabled checkbox.
    pub fn selected_color(&self) -> Color {
        self.selected
    }

    /// The fill color of a disabled, checked checkbox.
    pub fn disabled_selected_color(&self) -> Color {
        self.disabled_selected
    }

    /// The fill color of a disabled, unchecked checkbox.
    pub fn disabled_unselected_color(&self) -> Color {
        self.disabled_unselected
    }
}

impl Default for RoundCheckBoxColors {
    fn default() -> Self {
        Self {
            selected: Color::from_rgb8(36, 199, 31),
            disabled_selected: Color::from_rgb8(220, 219, 220),
            disabled_unselected: Color::TRANSPARENT,
            tick: Color::WHITE,
            border: Color::from_rgb8(53, 61, 53),
        }
    }
}
