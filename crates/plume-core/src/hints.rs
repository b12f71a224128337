// crates/plume-core/src/hints.rs
use serde::Serialize;

/// Fraction of the parent's size a child wants to occupy, per axis.
///
/// A `None` axis opts out of proportional sizing: the layout leaves that
/// dimension of the child untouched. The default is `(1.0, 1.0)`, so a
/// freshly created child fills its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeHint {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl SizeHint {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Proportional width, explicit height.
    pub fn width_only(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Proportional height, explicit width.
    pub fn height_only(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// Fully explicit sizing; the layout never resizes this child.
    pub fn none() -> Self {
        Self {
            width: None,
            height: None,
        }
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self {
            width: Some(1.0),
            height: Some(1.0),
        }
    }
}

/// One anchor-point binding inside a [`PosHint`].
///
/// Scalar variants bind a single edge or center line of the child to a
/// fraction of the parent's extent on that axis. `Pos` and `Center` bind
/// both axes at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PosHintEntry {
    X(f32),
    Right(f32),
    CenterX(f32),
    Y(f32),
    Top(f32),
    CenterY(f32),
    Pos(f32, f32),
    Center(f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosHintKind {
    X,
    Right,
    CenterX,
    Y,
    Top,
    CenterY,
    Pos,
    Center,
}

impl PosHintEntry {
    pub fn kind(&self) -> PosHintKind {
        match self {
            PosHintEntry::X(_) => PosHintKind::X,
            PosHintEntry::Right(_) => PosHintKind::Right,
            PosHintEntry::CenterX(_) => PosHintKind::CenterX,
            PosHintEntry::Y(_) => PosHintKind::Y,
            PosHintEntry::Top(_) => PosHintKind::Top,
            PosHintEntry::CenterY(_) => PosHintKind::CenterY,
            PosHintEntry::Pos(_, _) => PosHintKind::Pos,
            PosHintEntry::Center(_, _) => PosHintKind::Center,
        }
    }
}

/// Ordered collection of anchor bindings for one child.
///
/// Entries keep their insertion order, and re-setting a kind that is
/// already present updates the value without moving the entry. Layouts
/// apply entries front to back, so when two entries bind the same axis
/// the one inserted later wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PosHint {
    entries: Vec<PosHintEntry>,
}

impl PosHint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a binding. An existing entry of the same kind is
    /// overwritten in place.
    pub fn set(&mut self, entry: PosHintEntry) {
        let kind = entry.kind();
        match self.entries.iter_mut().find(|e| e.kind() == kind) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn with(mut self, entry: PosHintEntry) -> Self {
        self.set(entry);
        self
    }

    pub fn get(&self, kind: PosHintKind) -> Option<&PosHintEntry> {
        self.entries.iter().find(|e| e.kind() == kind)
    }

    /// Remove a binding; returns whether one was present.
    pub fn remove(&mut self, kind: PosHintKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.kind() != kind);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &PosHintEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_default_fills_parent() {
        let hint = SizeHint::default();
        assert_eq!(hint.width, Some(1.0));
        assert_eq!(hint.height, Some(1.0));
    }

    #[test]
    fn test_size_hint_single_axis() {
        assert_eq!(SizeHint::width_only(0.5).height, None);
        assert_eq!(SizeHint::height_only(0.25).width, None);
        assert_eq!(SizeHint::none(), SizeHint { width: None, height: None });
    }

    #[test]
    fn test_pos_hint_keeps_insertion_order() {
        let hint = PosHint::new()
            .with(PosHintEntry::X(0.1))
            .with(PosHintEntry::Y(0.2))
            .with(PosHintEntry::Center(0.5, 0.5));

        let kinds: Vec<_> = hint.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![PosHintKind::X, PosHintKind::Y, PosHintKind::Center]);
    }

    #[test]
    fn test_pos_hint_update_does_not_move_entry() {
        let mut hint = PosHint::new()
            .with(PosHintEntry::X(0.1))
            .with(PosHintEntry::Top(0.9));

        // Updating X keeps it in front of Top.
        hint.set(PosHintEntry::X(0.4));
        let kinds: Vec<_> = hint.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![PosHintKind::X, PosHintKind::Top]);
        assert_eq!(hint.get(PosHintKind::X), Some(&PosHintEntry::X(0.4)));
    }

    #[test]
    fn test_pos_hint_remove() {
        let mut hint = PosHint::new().with(PosHintEntry::Right(1.0));
        assert!(hint.remove(PosHintKind::Right));
        assert!(!hint.remove(PosHintKind::Right));
        assert!(hint.is_empty());
    }
}
