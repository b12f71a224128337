// crates/plume-core/src/lib.rs
pub mod events;
pub mod hints;
pub mod tree;
pub mod widget;

pub use events::*;
pub use hints::*;
pub use tree::*;
pub use widget::*;

#[derive(Debug, thiserror::Error)]
pub enum PlumeError {
    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),

    #[error("Widget {child} already has parent {parent}")]
    AlreadyParented { child: WidgetId, parent: WidgetId },

    #[error("Widget {child} is not a child of {container}")]
    NotAChild { child: WidgetId, container: WidgetId },

    #[error("Widget {0} cannot be added to itself")]
    SelfParent(WidgetId),
}

pub type Result<T> = std::result::Result<T, PlumeError>;
