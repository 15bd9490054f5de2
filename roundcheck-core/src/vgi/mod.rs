//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing
//! widgets to be decoupled from the specific rendering implementation
//! (e.g., Vello).

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{BlendMode, Brush, Fill};

/// A trait for rendering vector graphics.
///
/// This trait abstracts over different rendering backends, allowing widgets
/// to be written without being tied to a specific implementation.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape
/// types (Circle, Rect, Line, etc.), convert them to BezPath using
/// [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Push a new layer clipped to `shape`.
    ///
    /// Everything drawn until the matching [pop_layer](Graphics::pop_layer)
    /// is composited onto the backdrop with the given blend mode, so erase
    /// effects (e.g. [Compose::Clear](vello::peniko::Compose::Clear)) stay
    /// scoped to the layer.
    fn push_layer(&mut self, blend: BlendMode, alpha: f32, transform: Affine, shape: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);

    /// Append another graphics scene to this one.
    fn append(&mut self, other: &vello::Scene, transform: Option<Affine>);
}

/// Helper function to convert a shape to BezPath for use with the
/// [Graphics] trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
