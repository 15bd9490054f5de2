use crate::app::info::AppInfo;
use crate::app::update::Update;
use crate::layout::{LayoutNode, LayoutStyle, StyleNode};
use crate::semantics::SemanticsNode;
use crate::signal::MaybeSignal;
use crate::vgi::Graphics;
use roundcheck_theme::id::WidgetId;
use roundcheck_theme::theme::Theme;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// A widget is driven once per frame: [update](Widget::update) observes the
/// input snapshot and reports what needs refreshing, then
/// [render](Widget::render) draws against the computed layout. Both run on
/// the UI thread; widgets hold no cross-thread state.
pub trait Widget {
    /// Render the widget to the graphics surface.
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
    );

    /// Update the widget state with the given frame info and layout.
    /// Returns what the host application should refresh.
    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update;

    /// Return the layout style node for layout computation.
    fn layout_style(&self) -> StyleNode;

    /// Describe the widget to the accessibility tree.
    ///
    /// The default implementation leaves the node untouched, which marks
    /// the widget as plain non-semantic content.
    fn semantics(&self, _node: &mut SemanticsNode) {}

    /// Return the widget id.
    fn widget_id(&self) -> WidgetId;
}

/// An extension trait for widgets with a layout style.
pub trait WidgetLayoutExt {
    /// Sets the layout style of the widget.
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>);

    /// Sets the layout style of the widget and returns self.
    fn with_layout_style(mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) -> Self
    where
        Self: Sized,
    {
        self.set_layout_style(layout_style);
        self
    }
}
