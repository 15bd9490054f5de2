//! Widget identification for the theming system.
//!
//! Widget IDs uniquely identify widget types and associate them with their
//! theme styles. The namespace is usually the crate providing the widget.

use std::fmt;

/// Unique identifier of a widget type, made of a namespace and an id.
///
/// ```rust
/// use roundcheck_theme::id::WidgetId;
///
/// let id = WidgetId::new("roundcheck-widgets", "RoundCheckBox");
/// assert_eq!(id.namespace(), "roundcheck-widgets");
/// assert_eq!(id.id(), "RoundCheckBox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id from a namespace and an id.
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// The namespace of the widget, usually the providing crate.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The id of the widget type within its namespace.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
