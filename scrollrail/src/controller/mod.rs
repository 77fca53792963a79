//! Scroll-state controllers: one per container kind, behind a shared trait.

mod continuous;
mod lazy_grid;
mod lazy_list;

pub use continuous::ContinuousController;
pub use lazy_grid::LazyGridController;
pub use lazy_list::LazyListController;

use crate::settings::SelectionMode;

/// Uniform surface the scrollbar wrapper drives once per frame.
///
/// [`refresh`](StateController::refresh) pulls a single metrics snapshot
/// from the source and recomputes every cached output; the getters then
/// stay mutually consistent until the next call.
pub trait StateController {
    /// Value surfaced by the optional floating indicator.
    type Indicator;

    fn refresh(&mut self);
    fn normalized_thumb_size(&self) -> f32;
    fn normalized_offset(&self) -> f32;
    /// True while a scroll is in progress, the thumb is selected, or the
    /// bar is configured always-on.
    fn thumb_in_action(&self) -> bool;
    fn is_selected(&self) -> bool;
    fn indicator_value(&self) -> Self::Indicator;
    /// Evaluate the selection policy for a drag beginning at `offset_px`
    /// along a track of `track_length_px`.
    fn drag_started(&mut self, offset_px: f32, track_length_px: f32);
    /// Advance an engaged drag by `delta_px` and issue the scroll command.
    fn drag_delta(&mut self, delta_px: f32, track_length_px: f32);
    /// End the session and clear the selection. Idempotent.
    fn drag_stopped(&mut self);
}

/// Drag-session state shared by every controller.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DragState {
    pub selected: bool,
    /// Normalized thumb offset the session is tracking.
    pub offset: f32,
}

impl DragState {
    /// Store a new drag offset, clamped to the travel left by the thumb.
    pub fn set_offset(&mut self, value: f32, thumb_size: f32) {
        let max = (1.0 - thumb_size).max(0.0);
        self.offset = value.clamp(0.0, max);
    }
}

/// Outcome of the selection policy at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragStart {
    /// Engage, continuing from the thumb's current offset.
    Engage { at: f32 },
    /// Engage after jumping the scroll position under the pointer.
    Jump { to: f32 },
    /// Gesture not consumed.
    Ignore,
}

/// Evaluated once when a drag begins. `new_offset` is the pointer position
/// and `current_offset` the thumb position, both normalized and already
/// mirrored for reverse layout.
pub(crate) fn resolve_drag_start(
    mode: SelectionMode,
    new_offset: f32,
    current_offset: f32,
    thumb_size: f32,
) -> DragStart {
    let on_thumb = new_offset >= current_offset && new_offset <= current_offset + thumb_size;
    match mode {
        SelectionMode::Full => {
            if on_thumb {
                DragStart::Engage { at: current_offset }
            } else {
                DragStart::Jump { to: new_offset }
            }
        }
        SelectionMode::Thumb => {
            if on_thumb {
                DragStart::Engage { at: current_offset }
            } else {
                DragStart::Ignore
            }
        }
        SelectionMode::Disabled => DragStart::Ignore,
    }
}

/// Second phase of a jump-then-refine scroll, waiting for the jump target
/// to be laid out. Single slot: a newer drag tick overwrites it, and a
/// snapshot that no longer matches the target drops it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PendingRefine {
    pub index: usize,
    /// Fraction of the target item still to scroll past.
    pub remainder: f32,
}
