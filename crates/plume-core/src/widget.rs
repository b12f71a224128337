// crates/plume-core/src/widget.rs
use glam::Vec2;

use crate::hints::{PosHint, SizeHint};

pub type WidgetId = u32;

/// A node in the widget tree.
///
/// `position` is the bottom-left corner of the widget; `right` and `top`
/// are the far edges. A new widget carries the placeholder size `(1, 1)`
/// until real geometry is assigned.
#[derive(Debug, Clone)]
pub struct Widget {
    pub name: String,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,

    // Geometry
    pub position: Vec2,
    pub size: Vec2,

    // Layout hints
    pub size_hint: SizeHint,
    pub pos_hint: PosHint,
}

impl Widget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_size_hint(mut self, size_hint: SizeHint) -> Self {
        self.size_hint = size_hint;
        self
    }

    pub fn with_pos_hint(mut self, pos_hint: PosHint) -> Self {
        self.pos_hint = pos_hint;
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Far edge on the x axis.
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Far edge on the y axis.
    pub fn top(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.size.y / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Move the widget so its right edge sits at `right`.
    pub fn set_right(&mut self, right: f32) {
        self.position.x = right - self.size.x;
    }

    /// Move the widget so its top edge sits at `top`.
    pub fn set_top(&mut self, top: f32) {
        self.position.y = top - self.size.y;
    }

    pub fn set_center_x(&mut self, center_x: f32) {
        self.position.x = center_x - self.size.x / 2.0;
    }

    pub fn set_center_y(&mut self, center_y: f32) {
        self.position.y = center_y - self.size.y / 2.0;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.position = center - self.size / 2.0;
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent: None,
            children: Vec::new(),
            position: Vec2::ZERO,
            size: Vec2::ONE,
            size_hint: SizeHint::default(),
            pos_hint: PosHint::default(),
        }
    }
}
