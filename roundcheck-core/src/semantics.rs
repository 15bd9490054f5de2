//! Accessibility description of widgets, bridged to [accesskit].
//!
//! Widgets fill in a [SemanticsNode] each frame via
//! [Widget::semantics](crate::widget::Widget::semantics); a platform
//! adapter converts the collected nodes into an accesskit tree update.

pub use accesskit::{Action, Role, Toggled};

/// The state a widget reports to assistive technology.
///
/// This mirrors the subset of [accesskit::Node] the widgets in this
/// workspace use, kept as a plain value so tests can assert on it without
/// a platform adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticsNode {
    role: Role,
    toggled: Option<Toggled>,
    disabled: bool,
    actions: Vec<Action>,
    label: Option<String>,
}

impl SemanticsNode {
    /// Creates a node with the given role and no further state.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            toggled: None,
            disabled: false,
            actions: Vec::new(),
            label: None,
        }
    }

    /// Sets the role of the node.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// The role of the node.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Sets the toggle state of the node.
    pub fn set_toggled(&mut self, toggled: Toggled) {
        self.toggled = Some(toggled);
    }

    /// The toggle state of the node, if it reports one.
    pub fn toggled(&self) -> Option<Toggled> {
        self.toggled
    }

    /// Marks the node as disabled for assistive technology.
    pub fn set_disabled(&mut self) {
        self.disabled = true;
    }

    /// Whether the node is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Adds a supported action to the node.
    pub fn add_action(&mut self, action: Action) {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    /// Whether the node supports the given action.
    pub fn supports_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Sets the accessible label of the node.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// The accessible label of the node.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Build the platform node handed to the accessibility adapter.
    pub fn to_node(&self) -> accesskit::Node {
        let mut node = accesskit::Node::new(self.role);
        if let Some(toggled) = self.toggled {
            node.set_toggled(toggled);
        }
        if self.disabled {
            node.set_disabled();
        }
        for action in &self.actions {
            node.add_action(*action);
        }
        if let Some(label) = &self.label {
            node.set_label(label.clone());
        }
        node
    }
}

impl Default for SemanticsNode {
    fn default() -> Self {
        Self::new(Role::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_node_roundtrip() {
        let mut semantics = SemanticsNode::new(Role::CheckBox);
        semantics.set_toggled(Toggled::True);
        semantics.add_action(Action::Click);
        semantics.set_label("accept terms");

        assert_eq!(semantics.role(), Role::CheckBox);
        assert_eq!(semantics.toggled(), Some(Toggled::True));
        assert!(semantics.supports_action(Action::Click));
        assert!(!semantics.is_disabled());

        let node = semantics.to_node();
        assert_eq!(node.role(), Role::CheckBox);
    }

    #[test]
    fn actions_are_deduplicated() {
        let mut semantics = SemanticsNode::default();
        semantics.add_action(Action::Click);
        semantics.add_action(Action::Click);
        assert!(semantics.supports_action(Action::Click));
        assert!(!semantics.supports_action(Action::Focus));
    }
}
