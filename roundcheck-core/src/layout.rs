//! Layout types and computation helpers.
//!
//! Widgets describe their layout with a [LayoutStyle] and receive the
//! computed result as a [LayoutNode] with absolute coordinates.

use nalgebra::Vector2;
use taffy::{AvailableSpace, NodeId, Size, TaffyError, TaffyTree};

pub use taffy::{Dimension, Layout, LengthPercentageAuto, Rect};

/// Style information for a single widget.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyle {
    /// The requested size of the widget.
    pub size: Vector2<Dimension>,
    /// Outer margin around the widget.
    pub margin: Rect<LengthPercentageAuto>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            size: Vector2::new(Dimension::auto(), Dimension::auto()),
            margin: margin_all(0.0),
        }
    }
}

/// A uniform margin on all four sides.
pub fn margin_all(value: f32) -> Rect<LengthPercentageAuto> {
    Rect {
        left: LengthPercentageAuto::length(value),
        right: LengthPercentageAuto::length(value),
        top: LengthPercentageAuto::length(value),
        bottom: LengthPercentageAuto::length(value),
    }
}

/// A node in the style tree, prior to layout computation.
pub struct StyleNode {
    /// The style of this node.
    pub style: LayoutStyle,
    /// The styles of the node's children.
    pub children: Vec<StyleNode>,
}

/// A computed layout node with absolute coordinates.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// The computed layout of this node.
    pub layout: Layout,
    /// The computed layouts of the node's children.
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A leaf node covering the given rectangle. Useful for headless hosts
    /// and tests that drive a widget without a full style tree.
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut layout = Layout::new();
        layout.location = taffy::Point { x, y };
        layout.size = Size { width, height };
        Self {
            layout,
            children: Vec::new(),
        }
    }
}

/// Compute the layout of a style tree within the given available space.
///
/// Locations in the returned tree are absolute, not parent-relative.
pub fn compute_root_layout(
    root: &StyleNode,
    space: Vector2<f64>,
) -> Result<LayoutNode, TaffyError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let root_id = build(&mut tree, root)?;

    tree.compute_layout(
        root_id,
        Size {
            width: AvailableSpace::Definite(space.x as f32),
            height: AvailableSpace::Definite(space.y as f32),
        },
    )?;

    collect(&tree, root_id, 0.0, 0.0)
}

fn build(tree: &mut TaffyTree<()>, node: &StyleNode) -> Result<NodeId, TaffyError> {
    let children = node
        .children
        .iter()
        .map(|child| build(tree, child))
        .collect::<Result<Vec<_>, _>>()?;

    let style = taffy::Style {
        size: Size {
            width: node.style.size.x,
            height: node.style.size.y,
        },
        margin: node.style.margin,
        ..Default::default()
    };

    tree.new_with_children(style, &children)
}

fn collect(
    tree: &TaffyTree<()>,
    node: NodeId,
    origin_x: f32,
    origin_y: f32,
) -> Result<LayoutNode, TaffyError> {
    let mut layout = *tree.layout(node)?;
    layout.location.x += origin_x;
    layout.location.y += origin_y;

    let children = tree
        .children(node)?
        .into_iter()
        .map(|child| collect(tree, child, layout.location.x, layout.location.y))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LayoutNode { layout, children })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_leaf_with_margin() {
        let root = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(30.0), Dimension::length(30.0)),
                margin: margin_all(2.0),
            },
            children: Vec::new(),
        };

        let node = compute_root_layout(&root, Vector2::new(120.0, 120.0)).unwrap();
        assert_eq!(node.layout.size.width, 30.0);
        assert_eq!(node.layout.size.height, 30.0);
    }

    #[test]
    fn child_locations_are_absolute() {
        let leaf = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(10.0), Dimension::length(10.0)),
                margin: margin_all(5.0),
            },
            children: Vec::new(),
        };
        let root = StyleNode {
            style: LayoutStyle::default(),
            children: vec![leaf],
        };

        let node = compute_root_layout(&root, Vector2::new(100.0, 100.0)).unwrap();
        let child = &node.children[0];
        assert_eq!(child.layout.location.x, node.layout.location.x + 5.0);
        assert_eq!(child.layout.location.y, node.layout.location.y + 5.0);
    }

    #[test]
    fn from_rect_positions_leaf() {
        let node = LayoutNode::from_rect(4.0, 6.0, 30.0, 30.0);
        assert_eq!(node.layout.location.x, 4.0);
        assert_eq!(node.layout.location.y, 6.0);
        assert_eq!(node.layout.size.width, 30.0);
    }
}
