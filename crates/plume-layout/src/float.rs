// crates/plume-layout/src/float.rs
use glam::Vec2;
use tracing::trace;

use plume_core::{PosHintEntry, Result, Widget, WidgetId, WidgetProperty, WidgetTree};

use crate::LayoutStrategy;

/// Anchor-based layout: children are sized as fractions of the container
/// and pinned to fractional anchor points within it.
///
/// A child's `size_hint` scales each axis of the container's size, with
/// the result truncated toward zero. Its `pos_hint` entries are applied
/// in insertion order against the container's origin and extent; entries
/// that bind the same axis overwrite each other, last one wins. A child
/// with no hint on an axis keeps whatever geometry was set by hand on
/// that axis.
pub struct FloatLayout;

impl LayoutStrategy for FloatLayout {
    fn name(&self) -> &'static str {
        "float"
    }

    fn container_triggers(&self) -> &'static [WidgetProperty] {
        &[
            WidgetProperty::Children,
            WidgetProperty::Pos,
            WidgetProperty::PosHint,
            WidgetProperty::SizeHint,
            WidgetProperty::Size,
        ]
    }

    fn child_triggers(&self) -> &'static [WidgetProperty] {
        &[WidgetProperty::Pos, WidgetProperty::PosHint]
    }

    fn layout(&self, tree: &mut WidgetTree, container: WidgetId) -> Result<()> {
        let (parent_pos, parent_size, children) = {
            let parent = tree.get(container)?;
            (parent.position, parent.size, parent.children.clone())
        };

        // A container keeps the placeholder size (1, 1) until it receives
        // real geometry; laying out against it would be meaningless.
        if parent_size == Vec2::ONE {
            trace!(container, "container has placeholder size, skipping");
            return Ok(());
        }

        for child_id in children {
            let (pos, size) = {
                let child = tree.get(child_id)?;
                place_child(parent_pos, parent_size, child)
            };
            trace!(container, child = child_id, ?pos, ?size, "placed");
            tree.set_size(child_id, size)?;
            tree.set_pos(child_id, pos)?;
        }
        Ok(())
    }
}

/// Compute one child's geometry from the container's geometry and the
/// child's hints. Size is resolved first so edge anchors (`Right`, `Top`,
/// the centers) see the new extent.
fn place_child(parent_pos: Vec2, parent_size: Vec2, child: &Widget) -> (Vec2, Vec2) {
    let (w, h) = (parent_size.x, parent_size.y);
    let (x, y) = (parent_pos.x, parent_pos.y);

    let mut size = child.size;
    match (child.size_hint.width, child.size_hint.height) {
        (Some(shw), Some(shh)) => {
            size.x = (w * shw).trunc();
            size.y = (h * shh).trunc();
        }
        (Some(shw), None) => size.x = (w * shw).trunc(),
        (None, Some(shh)) => size.y = (h * shh).trunc(),
        (None, None) => {}
    }

    let mut pos = child.position;
    for entry in child.pos_hint.iter() {
        match *entry {
            PosHintEntry::X(v) => pos.x = (x + v * w).trunc(),
            PosHintEntry::Right(v) => pos.x = (x + v * w).trunc() - size.x,
            PosHintEntry::CenterX(v) => pos.x = (x + v * w).trunc() - size.x / 2.0,
            PosHintEntry::Y(v) => pos.y = (y + v * h).trunc(),
            PosHintEntry::Top(v) => pos.y = (y + v * h).trunc() - size.y,
            PosHintEntry::CenterY(v) => pos.y = (y + v * h).trunc() - size.y / 2.0,
            PosHintEntry::Pos(a, b) => {
                pos.x = (x + a * w).trunc();
                pos.y = (y + b * h).trunc();
            }
            PosHintEntry::Center(a, b) => {
                pos.x = (x + a * w).trunc() - size.x / 2.0;
                pos.y = (y + b * h).trunc() - size.y / 2.0;
            }
        }
    }

    (pos, size)
}
