// crates/plume-layout/src/lib.rs

use plume_core::{Result, WidgetId, WidgetProperty, WidgetTree};

pub mod float;

pub use float::*;

/// A layout strategy positions and sizes the children of one container.
///
/// Strategies are stateless with respect to the tree: everything a
/// recompute needs is read from the container and its children at call
/// time. The trigger lists tell the runtime which property changes must
/// schedule a recompute of the owning container.
pub trait LayoutStrategy {
    fn name(&self) -> &'static str;

    /// Properties of the container itself that invalidate its layout.
    fn container_triggers(&self) -> &'static [WidgetProperty];

    /// Properties of each child that invalidate the container's layout.
    fn child_triggers(&self) -> &'static [WidgetProperty];

    /// Recompute the geometry of `container`'s children in place.
    ///
    /// Writes go through the tree's notifying setters, so a child that is
    /// itself a container observes its own geometry changes and gets
    /// re-laid-out in turn.
    fn layout(&self, tree: &mut WidgetTree, container: WidgetId) -> Result<()>;
}
