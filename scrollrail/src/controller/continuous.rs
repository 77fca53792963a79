//! Controller for continuous-offset scroll regions.

use crate::controller::{resolve_drag_start, DragStart, DragState, StateController};
use crate::geometry;
use crate::settings::{ScrollbarSettings, SelectionMode};
use crate::source::ContinuousSource;

#[derive(Debug, Clone, Copy, Default)]
struct Derived {
    thumb_size: f32,
    offset: f32,
    max_scroll_offset: f32,
    scroll_in_progress: bool,
}

/// Maps a continuous scroll offset onto the thumb and back.
///
/// Drag targeting is exact here: the dragged fraction converts straight to
/// an absolute pixel offset, with no intermediate layout pass.
pub struct ContinuousController<C> {
    source: C,
    thumb_min_length: f32,
    thumb_max_length: f32,
    always_show: bool,
    selection_mode: SelectionMode,
    drag: DragState,
    derived: Derived,
}

impl<C: ContinuousSource> ContinuousController<C> {
    pub fn new(source: C, settings: &ScrollbarSettings) -> Self {
        let mut controller = Self {
            source,
            thumb_min_length: settings.thumb_min_length,
            thumb_max_length: settings.thumb_max_length,
            always_show: settings.always_show_scrollbar,
            selection_mode: settings.selection_mode,
            drag: DragState::default(),
            derived: Derived::default(),
        };
        controller.recompute();
        controller
    }

    /// Borrow the wrapped source handle.
    pub fn source(&self) -> &C {
        &self.source
    }

    fn recompute(&mut self) {
        let metrics = self.source.metrics();
        let full_length = metrics.visible_length + metrics.max_scroll_offset;
        let raw = geometry::thumb_size(metrics.visible_length, full_length);
        let thumb_size = geometry::apply_bounds(raw, self.thumb_min_length, self.thumb_max_length);
        let offset = if metrics.max_scroll_offset <= 0.0 {
            0.0
        } else {
            geometry::track_correction(
                metrics.scroll_offset / metrics.max_scroll_offset,
                thumb_size,
            )
        };
        self.derived = Derived {
            thumb_size,
            offset,
            max_scroll_offset: metrics.max_scroll_offset,
            scroll_in_progress: metrics.scroll_in_progress,
        };
    }

    fn set_scroll_offset(&mut self, new_offset: f32) {
        self.drag.set_offset(new_offset, self.derived.thumb_size);
        let exact = geometry::track_correction_inverse(
            self.derived.max_scroll_offset * self.drag.offset,
            self.derived.thumb_size,
        );
        self.source.scroll_to(exact);
    }
}

impl<C: ContinuousSource> StateController for ContinuousController<C> {
    type Indicator = f32;

    fn refresh(&mut self) {
        self.recompute();
    }

    fn normalized_thumb_size(&self) -> f32 {
        self.derived.thumb_size
    }

    fn normalized_offset(&self) -> f32 {
        self.derived.offset
    }

    fn thumb_in_action(&self) -> bool {
        self.derived.scroll_in_progress || self.drag.selected || self.always_show
    }

    fn is_selected(&self) -> bool {
        self.drag.selected
    }

    /// Real content fraction under the thumb.
    fn indicator_value(&self) -> f32 {
        geometry::track_correction_inverse(self.derived.offset, self.derived.thumb_size)
    }

    fn drag_started(&mut self, offset_px: f32, track_length_px: f32) {
        if track_length_px <= 0.0 {
            return;
        }
        let new_offset = offset_px / track_length_px;
        match resolve_drag_start(
            self.selection_mode,
            new_offset,
            self.derived.offset,
            self.derived.thumb_size,
        ) {
            DragStart::Engage { at } => {
                self.drag.set_offset(at, self.derived.thumb_size);
                self.drag.selected = true;
            }
            DragStart::Jump { to } => {
                self.set_scroll_offset(to);
                self.drag.selected = true;
            }
            DragStart::Ignore => {}
        }
    }

    fn drag_delta(&mut self, delta_px: f32, track_length_px: f32) {
        if track_length_px <= 0.0 || !self.drag.selected {
            return;
        }
        self.set_scroll_offset(self.drag.offset + delta_px / track_length_px);
    }

    fn drag_stopped(&mut self) {
        self.drag.selected = false;
    }
}
