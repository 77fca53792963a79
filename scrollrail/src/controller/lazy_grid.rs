//! Controller for lazy virtualized grids.
//!
//! Same estimation model as the list controller but in row units: hosts do
//! not report a column count, so it is inferred from the visible items'
//! column indices each snapshot and every item quantity is divided through
//! by it. Refinement scrolls land with a second `scroll_to_item` carrying
//! the sub-row pixel offset.

use crate::controller::{
    resolve_drag_start, DragStart, DragState, PendingRefine, StateController,
};
use crate::geometry;
use crate::settings::{ScrollbarSettings, SelectionMode};
use crate::source::{LazyLayout, LazySource};

#[derive(Debug, Clone, Copy, Default)]
struct Derived {
    thumb_size_raw: f32,
    thumb_size: f32,
    offset: f32,
    total_items: usize,
    first_visible_index: usize,
    columns: usize,
    reversed: bool,
    scroll_in_progress: bool,
}

pub struct LazyGridController<C> {
    source: C,
    thumb_min_length: f32,
    thumb_max_length: f32,
    always_show: bool,
    selection_mode: SelectionMode,
    drag: DragState,
    pending: Option<PendingRefine>,
    derived: Derived,
}

impl<C: LazySource> LazyGridController<C> {
    pub fn new(source: C, settings: &ScrollbarSettings) -> Self {
        let mut controller = Self {
            source,
            thumb_min_length: settings.thumb_min_length,
            thumb_max_length: settings.thumb_max_length,
            always_show: settings.always_show_scrollbar,
            selection_mode: settings.selection_mode,
            drag: DragState::default(),
            pending: None,
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
        let layout = self.source.layout();
        self.resolve_pending(&layout);
        let columns = layout.column_count();
        let raw = raw_thumb_size(&layout, columns);
        let thumb_size = geometry::apply_bounds(raw, self.thumb_min_length, self.thumb_max_length);
        self.derived = Derived {
            thumb_size_raw: raw,
            thumb_size,
            offset: normalized_offset(&layout, columns, raw, thumb_size),
            total_items: layout.total_items,
            first_visible_index: layout.first_visible_index,
            columns,
            reversed: layout.reversed,
            scroll_in_progress: layout.scroll_in_progress,
        };
    }

    fn resolve_pending(&mut self, layout: &LazyLayout) {
        let Some(pending) = self.pending else {
            return;
        };
        let Some(first) = layout.real_first_visible() else {
            return;
        };
        if first.index != pending.index {
            self.pending = None;
            return;
        }
        self.pending = None;
        let refine = first.size * pending.remainder;
        log::trace!(
            "[scrollbar] refining scroll at item {} by {refine:.1}px",
            pending.index
        );
        self.source.scroll_to_item(pending.index, refine);
    }

    fn set_scroll_offset(&mut self, new_offset: f32) {
        if self.derived.total_items == 0 {
            return;
        }
        self.drag.set_offset(new_offset, self.derived.thumb_size);
        let total_rows = self.derived.total_items.div_ceil(self.derived.columns);
        let exact_row = geometry::offset_correction_inverse(
            total_rows as f32 * self.drag.offset,
            self.derived.thumb_size_raw,
            self.derived.thumb_size,
        );
        let index = exact_row.floor() as usize * self.derived.columns;
        self.pending = Some(PendingRefine {
            index,
            remainder: exact_row.fract(),
        });
        self.source.scroll_to_item(index, 0.0);
    }
}

fn raw_thumb_size(layout: &LazyLayout, columns: usize) -> f32 {
    if layout.total_items == 0 {
        return 0.0;
    }
    let Some(first) = layout.real_first_visible() else {
        return 0.0;
    };
    let Some(last) = layout.visible.last() else {
        return 0.0;
    };
    let first_partial = first.fraction_hidden_start(layout.first_visible_offset);
    let last_partial = 1.0
        - last.fraction_visible_end(layout.viewport_end_offset - layout.after_content_padding);
    // The pinned header occupies a layout slot outside the row flow; drop
    // it from the item count before converting to rows.
    let sticky = usize::from(layout.sticky_header_present());
    let visible_rows = layout.visible.len().saturating_sub(sticky).div_ceil(columns);
    let total_rows = layout.total_items.div_ceil(columns);
    (visible_rows as f32 - first_partial - last_partial) / total_rows as f32
}

fn normalized_offset(
    layout: &LazyLayout,
    columns: usize,
    raw_size: f32,
    effective_size: f32,
) -> f32 {
    if layout.total_items == 0 || layout.visible.is_empty() {
        return 0.0;
    }
    let Some(first) = layout.real_first_visible() else {
        return 0.0;
    };
    let total_rows = layout.total_items.div_ceil(columns);
    let row = (first.index / columns) as f32
        + first.fraction_hidden_start(layout.first_visible_offset);
    geometry::offset_correction(row / total_rows as f32, raw_size, effective_size, layout.reversed)
}

impl<C: LazySource> StateController for LazyGridController<C> {
    type Indicator = usize;

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

    /// Index of the first visible item.
    fn indicator_value(&self) -> usize {
        self.derived.first_visible_index
    }

    fn drag_started(&mut self, offset_px: f32, track_length_px: f32) {
        if track_length_px <= 0.0 {
            return;
        }
        let new_offset = if self.derived.reversed {
            (track_length_px - offset_px) / track_length_px
        } else {
            offset_px / track_length_px
        };
        let current_offset = if self.derived.reversed {
            1.0 - self.derived.offset - self.derived.thumb_size
        } else {
            self.derived.offset
        };
        match resolve_drag_start(
            self.selection_mode,
            new_offset,
            current_offset,
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
        let displace = if self.derived.reversed {
            -delta_px
        } else {
            delta_px
        };
        self.set_scroll_offset(self.drag.offset + displace / track_length_px);
    }

    fn drag_stopped(&mut self) {
        self.drag.selected = false;
    }
}
