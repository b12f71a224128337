// crates/plume-core/src/tree.rs
use glam::Vec2;
use std::collections::HashMap;
use tracing::trace;

use crate::events::{PropertyChange, WidgetProperty};
use crate::hints::{PosHint, SizeHint};
use crate::widget::{Widget, WidgetId};
use crate::{PlumeError, Result};

/// Arena of widgets plus the change queue the runtime drains.
///
/// All property writes go through the notifying setters below. A setter
/// queues a [`PropertyChange`] only when the new value differs from the
/// current one, so re-applying an identical value is free and recompute
/// cascades settle on a fixpoint.
#[derive(Debug, Default)]
pub struct WidgetTree {
    widgets: HashMap<WidgetId, Widget>,
    next_id: WidgetId,
    pending: Vec<PropertyChange>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        let id = self.next_id;
        self.next_id += 1;
        trace!(id, name = %widget.name, "widget inserted");
        self.widgets.insert(id, widget);
        id
    }

    pub fn get(&self, id: WidgetId) -> Result<&Widget> {
        self.widgets.get(&id).ok_or(PlumeError::WidgetNotFound(id))
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys().copied()
    }

    pub fn set_pos(&mut self, id: WidgetId, pos: Vec2) -> Result<()> {
        let widget = self.widgets.get_mut(&id).ok_or(PlumeError::WidgetNotFound(id))?;
        if widget.position != pos {
            widget.position = pos;
            self.pending.push(PropertyChange::new(id, WidgetProperty::Pos));
        }
        Ok(())
    }

    pub fn set_size(&mut self, id: WidgetId, size: Vec2) -> Result<()> {
        let widget = self.widgets.get_mut(&id).ok_or(PlumeError::WidgetNotFound(id))?;
        if widget.size != size {
            widget.size = size;
            self.pending.push(PropertyChange::new(id, WidgetProperty::Size));
        }
        Ok(())
    }

    pub fn set_size_hint(&mut self, id: WidgetId, hint: SizeHint) -> Result<()> {
        let widget = self.widgets.get_mut(&id).ok_or(PlumeError::WidgetNotFound(id))?;
        if widget.size_hint != hint {
            widget.size_hint = hint;
            self.pending.push(PropertyChange::new(id, WidgetProperty::SizeHint));
        }
        Ok(())
    }

    pub fn set_pos_hint(&mut self, id: WidgetId, hint: PosHint) -> Result<()> {
        let widget = self.widgets.get_mut(&id).ok_or(PlumeError::WidgetNotFound(id))?;
        if widget.pos_hint != hint {
            widget.pos_hint = hint;
            self.pending.push(PropertyChange::new(id, WidgetProperty::PosHint));
        }
        Ok(())
    }

    /// Append `child` to `container`'s child list.
    pub fn attach(&mut self, container: WidgetId, child: WidgetId) -> Result<()> {
        if container == child {
            return Err(PlumeError::SelfParent(child));
        }
        if !self.widgets.contains_key(&container) {
            return Err(PlumeError::WidgetNotFound(container));
        }
        {
            let widget = self.widgets.get_mut(&child).ok_or(PlumeError::WidgetNotFound(child))?;
            if let Some(parent) = widget.parent {
                return Err(PlumeError::AlreadyParented { child, parent });
            }
            widget.parent = Some(container);
        }
        if let Some(container_widget) = self.widgets.get_mut(&container) {
            container_widget.children.push(child);
        }
        self.pending.push(PropertyChange::new(container, WidgetProperty::Children));
        Ok(())
    }

    /// Remove `child` from `container`'s child list.
    pub fn detach(&mut self, container: WidgetId, child: WidgetId) -> Result<()> {
        if !self.widgets.contains_key(&child) {
            return Err(PlumeError::WidgetNotFound(child));
        }
        let container_widget = self
            .widgets
            .get_mut(&container)
            .ok_or(PlumeError::WidgetNotFound(container))?;
        let index = container_widget
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(PlumeError::NotAChild { child, container })?;
        container_widget.children.remove(index);
        if let Some(widget) = self.widgets.get_mut(&child) {
            widget.parent = None;
        }
        self.pending.push(PropertyChange::new(container, WidgetProperty::Children));
        Ok(())
    }

    /// Drain the queued changes in the order they were recorded.
    pub fn take_changes(&mut self) -> Vec<PropertyChange> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::PosHintEntry;

    #[test]
    fn test_setters_queue_changes() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Widget::named("w"));

        tree.set_pos(id, Vec2::new(5.0, 5.0)).unwrap();
        tree.set_size(id, Vec2::new(50.0, 50.0)).unwrap();

        let changes = tree.take_changes();
        assert_eq!(
            changes,
            vec![
                PropertyChange::new(id, WidgetProperty::Pos),
                PropertyChange::new(id, WidgetProperty::Size),
            ]
        );
        assert!(!tree.has_pending_changes());
    }

    #[test]
    fn test_identical_value_queues_nothing() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Widget::named("w").with_size(Vec2::new(40.0, 40.0)));

        tree.set_size(id, Vec2::new(40.0, 40.0)).unwrap();
        tree.set_pos(id, Vec2::ZERO).unwrap();
        tree.set_size_hint(id, SizeHint::default()).unwrap();
        assert!(!tree.has_pending_changes());

        let mut hint = PosHint::new();
        hint.set(PosHintEntry::X(0.5));
        tree.set_pos_hint(id, hint.clone()).unwrap();
        assert_eq!(tree.take_changes().len(), 1);

        // Same hint again is a no-op.
        tree.set_pos_hint(id, hint).unwrap();
        assert!(!tree.has_pending_changes());
    }

    #[test]
    fn test_attach_detach() {
        let mut tree = WidgetTree::new();
        let container = tree.insert(Widget::named("container"));
        let child = tree.insert(Widget::named("child"));

        tree.attach(container, child).unwrap();
        assert_eq!(tree.get(container).unwrap().children, vec![child]);
        assert_eq!(tree.get(child).unwrap().parent, Some(container));

        // A parented widget cannot be attached twice.
        assert!(matches!(
            tree.attach(container, child),
            Err(PlumeError::AlreadyParented { .. })
        ));

        tree.detach(container, child).unwrap();
        assert!(tree.get(container).unwrap().children.is_empty());
        assert_eq!(tree.get(child).unwrap().parent, None);

        assert!(matches!(
            tree.detach(container, child),
            Err(PlumeError::NotAChild { .. })
        ));
    }

    #[test]
    fn test_attach_rejects_self_parent() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Widget::named("w"));
        assert!(matches!(tree.attach(id, id), Err(PlumeError::SelfParent(_))));
    }

    #[test]
    fn test_unknown_widget_errors() {
        let mut tree = WidgetTree::new();
        assert!(matches!(tree.get(7), Err(PlumeError::WidgetNotFound(7))));
        assert!(matches!(
            tree.set_pos(7, Vec2::ZERO),
            Err(PlumeError::WidgetNotFound(7))
        ));
    }
}
