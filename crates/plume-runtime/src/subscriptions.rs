// crates/plume-runtime/src/subscriptions.rs
use std::collections::HashMap;

use plume_core::{PropertyChange, WidgetId, WidgetProperty};

/// Registry of which containers must recompute when a given widget
/// property changes.
///
/// Listener lists are ordered and duplicate-free; subscribing the same
/// container twice is a no-op, so attach/detach cycles stay balanced.
#[derive(Debug, Default)]
pub struct Subscriptions {
    listeners: HashMap<(WidgetId, WidgetProperty), Vec<WidgetId>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, widget: WidgetId, property: WidgetProperty, container: WidgetId) {
        let entry = self.listeners.entry((widget, property)).or_default();
        if !entry.contains(&container) {
            entry.push(container);
        }
    }

    pub fn unsubscribe(&mut self, widget: WidgetId, property: WidgetProperty, container: WidgetId) {
        if let Some(entry) = self.listeners.get_mut(&(widget, property)) {
            entry.retain(|&c| c != container);
            if entry.is_empty() {
                self.listeners.remove(&(widget, property));
            }
        }
    }

    /// Containers listening for this change, in subscription order.
    pub fn subscribers(&self, change: &PropertyChange) -> &[WidgetId] {
        self.listeners
            .get(&(change.widget, change.property))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
