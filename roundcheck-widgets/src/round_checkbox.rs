use std::time::Duration;

use nalgebra::Vector2;
use roundcheck_core::animation::Tween;
use roundcheck_core::app::info::AppInfo;
use roundcheck_core::app::update::Update;
use roundcheck_core::layout::{margin_all, Dimension, LayoutNode, LayoutStyle, StyleNode};
use roundcheck_core::semantics::{Action, Role, SemanticsNode, Toggled};
use roundcheck_core::signal::MaybeSignal;
use roundcheck_core::vg::kurbo::{Affine, BezPath, Cap, Circle, Rect, Shape, Stroke};
use roundcheck_core::vg::peniko::{BlendMode, Brush, Color, Compose, Fill, Mix};
use roundcheck_core::vgi::Graphics;
use roundcheck_core::widget::{Widget, WidgetLayoutExt};
use roundcheck_core::window::{ElementState, MouseButton};
use roundcheck_theme::id::WidgetId;
use roundcheck_theme::scheme::RoundCheckBoxColors;
use roundcheck_theme::theme::Theme;

/// Duration of the reveal mask and fill color animations.
const ANIMATION_DURATION: Duration = Duration::from_millis(200);

const DEFAULT_RADIUS: f64 = 10.0;
const DEFAULT_BORDER_WIDTH: f64 = 2.0;
const DEFAULT_TICK_STROKE_WIDTH: f64 = 5.0;
const DEFAULT_BOX_SIZE: f64 = 30.0;
const BOX_PADDING: f32 = 2.0;

/// Smallest radius the geometry clamp allows.
const MIN_RADIUS: f64 = 1.0;

/// Geometry of a [RoundCheckBox]. All draw coordinates derive from the
/// widget's center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundCheckBoxGeometry {
    /// Outer circle radius.
    pub radius: f64,
    /// Ring stroke width.
    pub border_width: f64,
    /// Checkmark stroke width.
    pub tick_stroke_width: f64,
    /// Side length of the padded square box the widget occupies.
    pub box_size: f64,
}

impl RoundCheckBoxGeometry {
    /// Largest radius the erase mask can take: the radius of the fill disc.
    pub fn max_mask_radius(&self) -> f64 {
        self.radius - self.border_width / 2.0
    }

    /// A copy with degenerate lengths clamped to drawable values.
    fn clamped(self) -> Self {
        let clamped = Self {
            radius: self.radius.max(MIN_RADIUS),
            border_width: self
                .border_width
                .clamp(0.1, self.radius.max(MIN_RADIUS) * 2.0),
            tick_stroke_width: self.tick_stroke_width.max(0.1),
            box_size: self.box_size.max(self.radius.max(MIN_RADIUS) * 2.0),
        };
        if clamped != self {
            log::warn!("degenerate checkbox geometry {:?}, clamped to {:?}", self, clamped);
        }
        clamped
    }
}

impl Default for RoundCheckBoxGeometry {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            tick_stroke_width: DEFAULT_TICK_STROKE_WIDTH,
            box_size: DEFAULT_BOX_SIZE,
        }
    }
}

/// A circular checkbox with an iris-reveal checkmark animation.
///
/// The checked state is owned by the host: the widget reports intended
/// toggles through the `on_toggle` callback and never mutates the state
/// itself. Without a callback the widget renders but exposes no
/// interactive affordance.
///
/// Checked and unchecked look alike in fill color while enabled; they are
/// told apart by an erase disc that irises over the fill. The disc covers
/// the whole fill when unchecked (leaving only the border ring) and
/// shrinks to nothing when checked, revealing fill and checkmark.
///
/// ### Theming
/// Styling the checkbox uses the following properties:
/// - `CheckboxSelected` - fill color while enabled
/// - `CheckboxDisabledSelected` - fill color when disabled and checked
/// - `CheckboxDisabledUnselected` - fill color when disabled and unchecked
/// - `CheckboxTick` - checkmark color
/// - `CheckboxBorder` - border ring color
///
/// An explicitly set [RoundCheckBoxColors] takes precedence over the theme.
pub struct RoundCheckBox {
    layout_style: MaybeSignal<LayoutStyle>,
    checked: MaybeSignal<bool>,
    enabled: MaybeSignal<bool>,
    on_toggle: Option<Box<dyn Fn(bool)>>,
    colors: Option<RoundCheckBoxColors>,
    geometry: RoundCheckBoxGeometry,
    mask_radius: Tween<f64>,
    fill_color: Option<Tween<Color>>,
    fill_dirty: bool,
    /// The (enabled, checked) snapshot the last update observed.
    seen: Option<(bool, bool)>,
}

impl RoundCheckBox {
    /// Create a new round checkbox with the given checked state.
    ///
    /// The state should be a signal if the host intends to apply toggles.
    pub fn new(checked: impl Into<MaybeSignal<bool>>) -> Self {
        let checked = checked.into();
        let geometry = RoundCheckBoxGeometry::default();
        let mask_at_rest = Self::mask_target(&geometry, *checked.get());

        Self {
            layout_style: LayoutStyle {
                size: Vector2::new(
                    Dimension::length(geometry.box_size as f32),
                    Dimension::length(geometry.box_size as f32),
                ),
                margin: margin_all(BOX_PADDING),
            }
            .into(),
            checked,
            enabled: MaybeSignal::value(true),
            on_toggle: None,
            colors: None,
            geometry,
            mask_radius: Tween::new(mask_at_rest, ANIMATION_DURATION),
            fill_color: None,
            fill_dirty: false,
            seen: None,
        }
    }

    fn apply_with(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    /// Sets the callback invoked with the new value on a valid activation.
    pub fn with_on_toggle(self, on_toggle: impl Fn(bool) + 'static) -> Self {
        self.apply_with(|s| s.on_toggle = Some(Box::new(on_toggle)))
    }

    /// Sets whether the checkbox responds to input. Disabled checkboxes
    /// suppress activation and report as disabled to assistive technology.
    pub fn with_enabled(self, enabled: impl Into<MaybeSignal<bool>>) -> Self {
        self.apply_with(|s| s.enabled = enabled.into())
    }

    /// Sets an explicit color scheme, overriding the theme.
    pub fn with_colors(self, colors: RoundCheckBoxColors) -> Self {
        self.apply_with(|s| s.colors = Some(colors))
    }

    /// Sets the full geometry of the checkbox.
    pub fn with_geometry(self, geometry: RoundCheckBoxGeometry) -> Self {
        self.apply_with(|s| {
            s.geometry = geometry;
            s.reset_mask();
        })
    }

    /// Sets the outer circle radius.
    pub fn with_radius(self, radius: f64) -> Self {
        self.apply_with(|s| {
            s.geometry.radius = radius;
            s.reset_mask();
        })
    }

    /// Sets the ring stroke width.
    pub fn with_border_width(self, border_width: f64) -> Self {
        self.apply_with(|s| {
            s.geometry.border_width = border_width;
            s.reset_mask();
        })
    }

    /// Sets the checkmark stroke width.
    pub fn with_tick_stroke_width(self, tick_stroke_width: f64) -> Self {
        self.apply_with(|s| s.geometry.tick_stroke_width = tick_stroke_width)
    }

    /// Snap the mask to the resting value for the current checked state.
    fn reset_mask(&mut self) {
        let target = Self::mask_target(&self.geometry.clamped(), *self.checked.get());
        self.mask_radius.snap(target);
    }

    /// Mask radius the animation heads toward for a checked state: zero
    /// when checked (fill fully revealed), the fill disc radius when
    /// unchecked (fill fully erased, ring only).
    fn mask_target(geometry: &RoundCheckBoxGeometry, checked: bool) -> f64 {
        if checked {
            0.0
        } else {
            geometry.max_mask_radius()
        }
    }

    fn bounds(layout_node: &LayoutNode) -> Rect {
        Rect::new(
            layout_node.layout.location.x as f64,
            layout_node.layout.location.y as f64,
            (layout_node.layout.location.x + layout_node.layout.size.width) as f64,
            (layout_node.layout.location.y + layout_node.layout.size.height) as f64,
        )
    }

    fn hit_test(layout_node: &LayoutNode, cursor: Vector2<f64>) -> bool {
        let rect = Self::bounds(layout_node);
        cursor.x >= rect.x0 && cursor.x <= rect.x1 && cursor.y >= rect.y0 && cursor.y <= rect.y1
    }

    /// The two-segment checkmark polyline, in center-relative coordinates
    /// of the draw area: a short diagonal down-right followed by a long
    /// diagonal up-right.
    fn tick_path(bounds: Rect) -> BezPath {
        let cx = bounds.width() / 2.0;
        let cy = bounds.height() / 2.0;

        let mut path = BezPath::new();
        path.move_to((bounds.x0 + cx * 2.0 / 3.0, bounds.y0 + cy));
        path.line_to((bounds.x0 + cx - cx / 6.0, bounds.y0 + cy + cy / 4.0));
        path.line_to((bounds.x0 + cx + cx * 3.0 / 8.0, bounds.y0 + cy * 6.0 / 8.0));
        path
    }
}

impl WidgetLayoutExt for RoundCheckBox {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for RoundCheckBox {
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
    ) {
        let width = layout_node.layout.size.width as f64;
        let height = layout_node.layout.size.height as f64;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let geometry = self.geometry.clamped();
        let (enabled, checked) = self
            .seen
            .unwrap_or_else(|| (*self.enabled.get(), *self.checked.get()));
        let scheme = self
            .colors
            .unwrap_or_else(|| theme.checkbox_colors(self.widget_id()));
        let fill_target = scheme.fill_color(enabled, checked);
        let now = info.now;

        let fill = match &mut self.fill_color {
            Some(tween) => {
                if self.fill_dirty {
                    // Disabled state changes snap; only the enabled branch
                    // animates its fill.
                    if enabled {
                        tween.retarget(fill_target, now);
                    } else {
                        tween.snap(fill_target);
                    }
                } else if tween.target() != fill_target {
                    // Scheme or theme swapped under us.
                    tween.snap(fill_target);
                }
                tween.sample(now)
            }
            None => {
                self.fill_color = Some(Tween::new(fill_target, ANIMATION_DURATION));
                fill_target
            }
        };
        self.fill_dirty = false;

        let mask_radius = self
            .mask_radius
            .sample(now)
            .clamp(0.0, geometry.max_mask_radius());

        let bounds = Self::bounds(layout_node);
        let center = bounds.center();

        // Offscreen layer scoped to the widget bounds, so the erase pass
        // below clears this widget's own pixels and nothing behind it.
        graphics.push_layer(
            BlendMode::new(Mix::Normal, Compose::SrcOver),
            1.0,
            Affine::IDENTITY,
            &bounds.to_path(0.1),
        );

        graphics.stroke(
            &Stroke::new(geometry.border_width),
            Affine::IDENTITY,
            &Brush::Solid(scheme.border_color()),
            None,
            &Circle::new(center, geometry.radius).to_path(0.1),
        );

        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(fill),
            None,
            &Circle::new(center, geometry.max_mask_radius()).to_path(0.1),
        );

        graphics.stroke(
            &Stroke::new(geometry.tick_stroke_width).with_caps(Cap::Round),
            Affine::IDENTITY,
            &Brush::Solid(scheme.tick_color()),
            None,
            &Self::tick_path(bounds),
        );

        // Cut a transparent hole of the animated mask radius through
        // everything drawn above.
        if mask_radius > 0.0 {
            let mask = Circle::new(center, mask_radius).to_path(0.1);
            graphics.push_layer(
                BlendMode::new(Mix::Normal, Compose::Clear),
                1.0,
                Affine::IDENTITY,
                &mask,
            );
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(Color::BLACK),
                None,
                &mask,
            );
            graphics.pop_layer();
        }

        graphics.pop_layer();
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();

        // One snapshot per frame: colors and mask retargets both derive
        // from it, so they can never observe different states.
        let enabled = *self.enabled.get();
        let checked = *self.checked.get();
        let snapshot = (enabled, checked);

        match self.seen {
            None => {
                self.mask_radius
                    .snap(Self::mask_target(&self.geometry.clamped(), checked));
                self.seen = Some(snapshot);
                self.fill_dirty = true;
                update |= Update::DRAW;
            }
            Some(previous) if previous != snapshot => {
                if previous.1 != checked {
                    self.mask_radius.retarget(
                        Self::mask_target(&self.geometry.clamped(), checked),
                        info.now,
                    );
                }
                self.seen = Some(snapshot);
                self.fill_dirty = true;
                update |= Update::DRAW;
            }
            Some(_) => {}
        }

        if enabled && self.on_toggle.is_some() {
            let cursor_hit = info
                .cursor_pos
                .map(|cursor| Self::hit_test(layout, cursor))
                .unwrap_or(false);

            if cursor_hit {
                for (button, state) in &info.buttons {
                    if *button == MouseButton::Left && *state == ElementState::Released {
                        if let Some(on_toggle) = &self.on_toggle {
                            // Re-read per event: a host applying the toggle
                            // makes a second release in the same frame undo
                            // the first instead of repeating it.
                            // Bind first so the borrow from `get()` drops
                            // before the callback runs, which may set the
                            // same signal.
                            let next = !*self.checked.get();
                            on_toggle(next);
                        }
                        update |= Update::DRAW;
                    }
                }
            }
        }

        let fill_animating = self
            .fill_color
            .as_ref()
            .is_some_and(|tween| tween.is_animating(info.now));
        if self.mask_radius.is_animating(info.now) || fill_animating {
            update |= Update::DRAW;
        }

        update
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: Vec::new(),
        }
    }

    fn semantics(&self, node: &mut SemanticsNode) {
        let enabled = *self.enabled.get();
        let checked = *self.checked.get();

        node.set_role(Role::CheckBox);
        node.set_toggled(if checked { Toggled::True } else { Toggled::False });
        // The affordance stays while disabled; activation is gated in
        // update, and the disabled flag tells assistive technology why.
        if self.on_toggle.is_some() {
            node.add_action(Action::Click);
        }
        if !enabled {
            node.set_disabled();
        }
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("roundcheck-widgets", "RoundCheckBox")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundcheck_core::signal::state::StateSignal;
    use roundcheck_core::signal::Signal;
    use roundcheck_theme::theme::LightTheme;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Graphics double recording the draw calls a render pass issues.
    #[derive(Default)]
    struct RecordingGraphics {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill { brush: Color },
        Stroke { brush: Color, width: f64 },
        PushLayer { compose: Compose },
        PopLayer,
    }

    impl Graphics for RecordingGraphics {
        fn fill(
            &mut self,
            _fill_rule: Fill,
            _transform: Affine,
            brush: &Brush,
            _brush_transform: Option<Affine>,
            _shape: &BezPath,
        ) {
            let Brush::Solid(color) = brush else {
                panic!("checkbox only draws solid brushes");
            };
            self.ops.push(Op::Fill { brush: *color });
        }

        fn stroke(
            &mut self,
            style: &Stroke,
            _transform: Affine,
            brush: &Brush,
            _brush_transform: Option<Affine>,
            _shape: &BezPath,
        ) {
            let Brush::Solid(color) = brush else {
                panic!("checkbox only draws solid brushes");
            };
            self.ops.push(Op::Stroke {
                brush: *color,
                width: style.width,
            });
        }

        fn push_layer(
            &mut self,
            blend: BlendMode,
            _alpha: f32,
            _transform: Affine,
            _shape: &BezPath,
        ) {
            self.ops.push(Op::PushLayer {
                compose: blend.compose,
            });
        }

        fn pop_layer(&mut self) {
            self.ops.push(Op::PopLayer);
        }

        fn append(&mut self, _other: &roundcheck_core::vg::Scene, _transform: Option<Affine>) {}
    }

    fn layout() -> LayoutNode {
        LayoutNode::from_rect(0.0, 0.0, 30.0, 30.0)
    }

    fn click(info: &mut AppInfo, layout: &LayoutNode) {
        let bounds = RoundCheckBox::bounds(layout);
        let center = bounds.center();
        info.cursor_pos = Some(Vector2::new(center.x, center.y));
        info.buttons.push((MouseButton::Left, ElementState::Released));
    }

    fn frame(info: &mut AppInfo) {
        info.buttons.clear();
        info.now += Duration::from_millis(16);
    }

    #[test]
    fn disabled_never_invokes_the_callback() {
        let toggles: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let mut checkbox = RoundCheckBox::new(false)
            .with_enabled(false)
            .with_on_toggle({
                let toggles = toggles.clone();
                move |value| toggles.borrow_mut().push(value)
            });

        let layout = layout();
        let mut info = AppInfo::default();
        click(&mut info, &layout);
        checkbox.update(&layout, &mut info);

        assert!(toggles.borrow().is_empty());
    }

    #[test]
    fn disabled_semantics_report_disabled_and_unchecked() {
        let checkbox = RoundCheckBox::new(false)
            .with_enabled(false)
            .with_on_toggle(|_| {});

        // The clickable region still exists; activation is suppressed in
        // update, not by removing the shape.
        let layout = layout();
        let center = RoundCheckBox::bounds(&layout).center();
        assert!(RoundCheckBox::hit_test(
            &layout,
            Vector2::new(center.x, center.y)
        ));

        let mut node = SemanticsNode::default();
        checkbox.semantics(&mut node);
        assert_eq!(node.role(), Role::CheckBox);
        assert_eq!(node.toggled(), Some(Toggled::False));
        assert!(node.is_disabled());
        // Disabling gates activation but keeps the click affordance.
        assert!(node.supports_action(Action::Click));
    }

    #[test]
    fn activation_toggles_once_and_semantics_follow() {
        let checked = StateSignal::new(false);
        let toggles: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()))
            .with_on_toggle({
                let checked = checked.clone();
                let toggles = toggles.clone();
                move |value| {
                    toggles.borrow_mut().push(value);
                    checked.set(value);
                }
            });

        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        frame(&mut info);
        click(&mut info, &layout);
        checkbox.update(&layout, &mut info);

        assert_eq!(toggles.borrow().as_slice(), &[true]);
        assert!(*checked.get());

        let mut node = SemanticsNode::default();
        checkbox.semantics(&mut node);
        assert_eq!(node.toggled(), Some(Toggled::True));
        assert!(!node.is_disabled());
        assert!(node.supports_action(Action::Click));
    }

    #[test]
    fn two_releases_in_one_frame_toggle_twice() {
        let checked = StateSignal::new(false);
        let toggles: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()))
            .with_on_toggle({
                let checked = checked.clone();
                let toggles = toggles.clone();
                move |value| {
                    toggles.borrow_mut().push(value);
                    checked.set(value);
                }
            });

        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        // Both events buffered into the same frame.
        frame(&mut info);
        click(&mut info, &layout);
        info.buttons.push((MouseButton::Left, ElementState::Released));
        checkbox.update(&layout, &mut info);

        // The second release undoes the first, not repeats it.
        assert_eq!(toggles.borrow().as_slice(), &[true, false]);
        assert!(!*checked.get());
    }

    #[test]
    fn without_callback_no_affordance_is_exposed() {
        let checkbox = RoundCheckBox::new(false);

        let mut node = SemanticsNode::default();
        checkbox.semantics(&mut node);
        assert_eq!(node.role(), Role::CheckBox);
        assert!(!node.supports_action(Action::Click));
        assert!(!node.is_disabled());
    }

    #[test]
    fn toggle_round_trip_restores_colors_and_mask_target() {
        let checked = StateSignal::new(true);
        let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()))
            .with_on_toggle({
                let checked = checked.clone();
                move |value| checked.set(value)
            });

        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        let scheme = RoundCheckBoxColors::default();
        let original_fill = scheme.fill_color(true, *checked.get());
        let original_target = checkbox.mask_radius.target();
        assert_eq!(original_target, 0.0);

        // Uncheck, then check again, a frame apart.
        frame(&mut info);
        click(&mut info, &layout);
        checkbox.update(&layout, &mut info);
        assert!(!*checked.get());

        frame(&mut info);
        click(&mut info, &layout);
        checkbox.update(&layout, &mut info);
        assert!(*checked.get());

        // A settling frame so the widget observes the final state.
        frame(&mut info);
        checkbox.update(&layout, &mut info);

        assert_eq!(scheme.fill_color(true, *checked.get()), original_fill);
        assert_eq!(checkbox.mask_radius.target(), original_target);
    }

    #[test]
    fn checked_flip_retargets_the_mask() {
        let checked = StateSignal::new(false);
        let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()));
        let layout = layout();
        let mut info = AppInfo::default();

        checkbox.update(&layout, &mut info);
        let geometry = RoundCheckBoxGeometry::default();
        assert_eq!(checkbox.mask_radius.target(), geometry.max_mask_radius());

        checked.set(true);
        frame(&mut info);
        let update = checkbox.update(&layout, &mut info);
        assert!(update.contains(Update::DRAW));
        assert_eq!(checkbox.mask_radius.target(), 0.0);
        assert!(checkbox.mask_radius.is_animating(info.now));
    }

    #[test]
    fn render_draw_order_and_erase_pass() {
        let mut checkbox = RoundCheckBox::new(false);
        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        let mut graphics = RecordingGraphics::default();
        let mut theme = LightTheme;
        checkbox.render(&mut graphics, &mut theme, &layout, &mut info);

        let scheme = RoundCheckBoxColors::default();
        assert_eq!(
            graphics.ops,
            vec![
                Op::PushLayer {
                    compose: Compose::SrcOver
                },
                Op::Stroke {
                    brush: scheme.border_color(),
                    width: 2.0
                },
                Op::Fill {
                    brush: scheme.fill_color(true, false)
                },
                Op::Stroke {
                    brush: scheme.tick_color(),
                    width: 5.0
                },
                Op::PushLayer {
                    compose: Compose::Clear
                },
                Op::Fill {
                    brush: Color::BLACK
                },
                Op::PopLayer,
                Op::PopLayer,
            ]
        );
    }

    #[test]
    fn checked_at_rest_draws_no_erase_pass() {
        let mut checkbox = RoundCheckBox::new(true);
        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        // Let any animation settle far in the future.
        info.now += Duration::from_secs(1);
        let mut graphics = RecordingGraphics::default();
        let mut theme = LightTheme;
        checkbox.render(&mut graphics, &mut theme, &layout, &mut info);

        assert!(!graphics
            .ops
            .iter()
            .any(|op| matches!(op, Op::PushLayer { compose: Compose::Clear })));
    }

    #[test]
    fn zero_sized_layout_skips_rendering() {
        let mut checkbox = RoundCheckBox::new(false);
        let layout = LayoutNode::from_rect(0.0, 0.0, 0.0, 0.0);
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        let mut graphics = RecordingGraphics::default();
        let mut theme = LightTheme;
        checkbox.render(&mut graphics, &mut theme, &layout, &mut info);

        assert!(graphics.ops.is_empty());
    }

    #[test]
    fn degenerate_geometry_is_clamped() {
        let geometry = RoundCheckBoxGeometry {
            radius: -4.0,
            border_width: 0.0,
            tick_stroke_width: -1.0,
            box_size: 0.0,
        }
        .clamped();

        assert!(geometry.radius >= MIN_RADIUS);
        assert!(geometry.border_width > 0.0);
        assert!(geometry.tick_stroke_width > 0.0);
        assert!(geometry.max_mask_radius() >= 0.0);
    }

    #[test]
    fn explicit_colors_override_the_theme() {
        let colors = RoundCheckBoxColors::new(
            Color::from_rgb8(200, 0, 0),
            Color::from_rgb8(1, 1, 1),
            Color::from_rgb8(2, 2, 2),
            Color::from_rgb8(3, 3, 3),
            Color::from_rgb8(4, 4, 4),
        );
        let mut checkbox = RoundCheckBox::new(true).with_colors(colors);
        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        let mut graphics = RecordingGraphics::default();
        let mut theme = LightTheme;
        checkbox.render(&mut graphics, &mut theme, &layout, &mut info);

        assert!(graphics.ops.contains(&Op::Fill {
            brush: Color::from_rgb8(200, 0, 0)
        }));
    }

    #[test]
    fn animation_in_flight_requests_redraws() {
        let checked = StateSignal::new(false);
        let mut checkbox = RoundCheckBox::new(MaybeSignal::signal(checked.clone()));
        let layout = layout();
        let mut info = AppInfo::default();
        checkbox.update(&layout, &mut info);

        checked.set(true);
        frame(&mut info);
        checkbox.update(&layout, &mut info);

        // Halfway through the 200ms interpolation: still redrawing.
        info.now += Duration::from_millis(100);
        assert!(checkbox.update(&layout, &mut info).contains(Update::DRAW));

        // Past the end: the widget goes quiet.
        info.now += Duration::from_millis(200);
        assert!(checkbox.update(&layout, &mut info).is_empty());
    }
}
