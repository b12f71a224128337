// crates/plume-runtime/src/lib.rs

use glam::Vec2;
use std::collections::HashMap;
use tracing::{debug, warn};

use plume_core::{PosHint, Result, SizeHint, Widget, WidgetId, WidgetTree};
use plume_layout::LayoutStrategy;

pub mod subscriptions;

pub use subscriptions::*;

/// Upper bound on recompute passes within one `update()` call. Layout
/// writes dispatch only on value changes, so a well-formed tree settles
/// in a couple of passes; hitting the bound means the subscription graph
/// keeps invalidating itself.
const MAX_LAYOUT_PASSES: usize = 8;

/// Single-threaded driver that owns the widget tree, the subscription
/// registry and the container-to-strategy table.
///
/// Application code mutates widgets through the notifying setters here;
/// `update()` then drains the recorded changes into synchronous layout
/// recomputes on the calling thread.
pub struct UiRuntime {
    tree: WidgetTree,
    subscriptions: Subscriptions,
    strategies: HashMap<WidgetId, Box<dyn LayoutStrategy>>,

    // Containers awaiting a recompute that no queued change expresses,
    // i.e. freshly attached strategies.
    pending_layouts: Vec<WidgetId>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self {
            tree: WidgetTree::new(),
            subscriptions: Subscriptions::new(),
            strategies: HashMap::new(),
            pending_layouts: Vec::new(),
        }
    }

    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        self.tree.insert(widget)
    }

    pub fn widget(&self, id: WidgetId) -> Result<&Widget> {
        self.tree.get(id)
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Attach a layout strategy to `container`.
    ///
    /// Subscribes the container's own trigger properties, plus the child
    /// triggers of any children it already has, and schedules an initial
    /// recompute for the next `update()`.
    pub fn set_layout(&mut self, container: WidgetId, strategy: Box<dyn LayoutStrategy>) -> Result<()> {
        let children = self.tree.get(container)?.children.clone();

        for &property in strategy.container_triggers() {
            self.subscriptions.subscribe(container, property, container);
        }
        for &child in &children {
            for &property in strategy.child_triggers() {
                self.subscriptions.subscribe(child, property, container);
            }
        }

        debug!(container, strategy = strategy.name(), "layout attached");
        self.strategies.insert(container, strategy);
        if !self.pending_layouts.contains(&container) {
            self.pending_layouts.push(container);
        }
        Ok(())
    }

    /// Append `child` to `container` and wire up its change triggers.
    pub fn add_widget(&mut self, container: WidgetId, child: WidgetId) -> Result<()> {
        self.tree.attach(container, child)?;
        if let Some(strategy) = self.strategies.get(&container) {
            for &property in strategy.child_triggers() {
                self.subscriptions.subscribe(child, property, container);
            }
        }
        Ok(())
    }

    /// Detach `child` from `container` and drop its change triggers.
    /// Later changes to the child no longer recompute the container.
    pub fn remove_widget(&mut self, container: WidgetId, child: WidgetId) -> Result<()> {
        self.tree.detach(container, child)?;
        if let Some(strategy) = self.strategies.get(&container) {
            for &property in strategy.child_triggers() {
                self.subscriptions.unsubscribe(child, property, container);
            }
        }
        Ok(())
    }

    pub fn set_pos(&mut self, id: WidgetId, pos: Vec2) -> Result<()> {
        self.tree.set_pos(id, pos)
    }

    pub fn set_size(&mut self, id: WidgetId, size: Vec2) -> Result<()> {
        self.tree.set_size(id, size)
    }

    pub fn set_size_hint(&mut self, id: WidgetId, hint: SizeHint) -> Result<()> {
        self.tree.set_size_hint(id, hint)
    }

    pub fn set_pos_hint(&mut self, id: WidgetId, hint: PosHint) -> Result<()> {
        self.tree.set_pos_hint(id, hint)
    }

    /// Drain queued property changes into layout recomputes.
    ///
    /// Runs until the queue is empty: a recompute may resize a nested
    /// container, whose own subscriptions then schedule it for the next
    /// pass. Value-equality dispatch in the tree guarantees the cascade
    /// reaches a fixpoint.
    pub fn update(&mut self) -> Result<()> {
        let mut dirty: Vec<WidgetId> = std::mem::take(&mut self.pending_layouts);
        let mut passes = 0;

        loop {
            for change in self.tree.take_changes() {
                for &container in self.subscriptions.subscribers(&change) {
                    if !dirty.contains(&container) {
                        dirty.push(container);
                    }
                }
            }
            if dirty.is_empty() {
                return Ok(());
            }

            passes += 1;
            if passes > MAX_LAYOUT_PASSES {
                warn!(passes, "layout did not settle; deferring remaining containers");
                self.pending_layouts = dirty;
                return Ok(());
            }

            for container in std::mem::take(&mut dirty) {
                if let Some(strategy) = self.strategies.get(&container) {
                    debug!(container, strategy = strategy.name(), "recomputing layout");
                    strategy.layout(&mut self.tree, container)?;
                }
            }
        }
    }
}

impl Default for UiRuntime {
    fn default() -> Self {
        Self::new()
    }
}
