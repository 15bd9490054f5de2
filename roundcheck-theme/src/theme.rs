//! The [Theme] trait and stock themes.

use crate::id::WidgetId;
use crate::scheme::RoundCheckBoxColors;
use vello::peniko::Color;

/// A color property a widget can ask a theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeProperty {
    /// Fill color of an enabled checkbox.
    CheckboxSelected,
    /// Fill color of a disabled, checked checkbox.
    CheckboxDisabledSelected,
    /// Fill color of a disabled, unchecked checkbox.
    CheckboxDisabledUnselected,
    /// Color of the checkmark.
    CheckboxTick,
    /// Color of the border ring.
    CheckboxBorder,
}

/// The base trait of all themes.
pub trait Theme {
    /// Get a color property for the given widget, if the theme styles it.
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color>;

    /// The window background color.
    fn window_background(&self) -> Color;

    /// Checkbox colors assembled from the theme's properties, falling back
    /// to the built-in defaults for anything the theme does not style.
    fn checkbox_colors(&self, id: WidgetId) -> RoundCheckBoxColors {
        let defaults = RoundCheckBoxColors::default();
        RoundCheckBoxColors::new(
            self.get_property(id.clone(), &ThemeProperty::CheckboxSelected)
                .unwrap_or(defaults.selected_color()),
            self.get_property(id.clone(), &ThemeProperty::CheckboxDisabledSelected)
                .unwrap_or(defaults.disabled_selected_color()),
            self.get_property(id.clone(), &ThemeProperty::CheckboxDisabledUnselected)
                .unwrap_or(defaults.disabled_unselected_color()),
            self.get_property(id.clone(), &ThemeProperty::CheckboxTick)
                .unwrap_or(defaults.tick_color()),
            self.get_property(id, &ThemeProperty::CheckboxBorder)
                .unwrap_or(defaults.border_color()),
        )
    }
}

/// The stock light theme. Styles nothing explicitly, so widgets fall back
/// to their built-in colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightTheme;

impl Theme for LightTheme {
    fn get_property(&self, _id: WidgetId, _property: &ThemeProperty) -> Option<Color> {
        None
    }

    fn window_background(&self) -> Color {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GreenBorderTheme;

    impl Theme for GreenBorderTheme {
        fn get_property(&self, _id: WidgetId, property: &ThemeProperty) -> Option<Color> {
            match property {
                ThemeProperty::CheckboxBorder => Some(Color::from_rgb8(0, 128, 0)),
                _ => None,
            }
        }

        fn window_background(&self) -> Color {
            Color::WHITE
        }
    }

    fn id() -> WidgetId {
        WidgetId::new("roundcheck-widgets", "RoundCheckBox")
    }

    #[test]
    fn light_theme_falls_back_to_defaults() {
        let colors = LightTheme.checkbox_colors(id());
        assert_eq!(colors, RoundCheckBoxColors::default());
    }

    #[test]
    fn themed_properties_override_defaults() {
        let colors = GreenBorderTheme.checkbox_colors(id());
        assert_eq!(colors.border_color(), Color::from_rgb8(0, 128, 0));
        // Untouched properties keep their defaults.
        assert_eq!(
            colors.selected_color(),
            RoundCheckBoxColors::default().selected_color()
        );
    }
}
