//! Scrollbar overlays for scrollable containers
//!
//! Attaches a draggable, auto-hiding scrollbar to a scroll region the host
//! describes through a source trait: a continuous viewport, a lazy list, or
//! a lazy grid. The host owns rendering and input; this crate owns the
//! geometry, the drag state machine, and the hide/selection animations.

pub mod anim;
pub mod color;
pub mod controller;
pub mod geometry;
pub mod layout;
pub mod scrollbar;
pub mod settings;
pub mod source;

pub use anim::{Easing, FadePhase};
pub use color::Color;
pub use controller::{
    ContinuousController, LazyGridController, LazyListController, StateController,
};
pub use layout::{Orientation, Rect, ScrollbarFrame, ScrollbarLayout};
pub use scrollbar::Scrollbar;
pub use settings::{
    ScrollbarSettings, SelectionActionable, SelectionMode, SettingsError, Side, ThumbShape,
};
pub use source::{ContinuousSource, LazyLayout, LazySource, ViewportMetrics, VisibleItem};
