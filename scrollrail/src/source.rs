//! Contracts a host scroll container implements to drive a scrollbar.
//!
//! Command methods take `&self`: implementors are expected to be cheap
//! handles with interior mutability, matching how host frameworks expose
//! their scroll-state objects. Out-of-range scroll targets are the
//! implementation's job to clamp.

/// Live metrics of a continuous scroll region, in pixels along the scroll
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub visible_length: f32,
    pub scroll_offset: f32,
    pub max_scroll_offset: f32,
    pub scroll_in_progress: bool,
}

/// A plain scroll region addressed by a single continuous offset.
pub trait ContinuousSource {
    fn metrics(&self) -> ViewportMetrics;
    /// Scroll to an absolute pixel offset.
    fn scroll_to(&self, offset: f32);
}

/// One laid-out item of a virtualized container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleItem {
    pub index: usize,
    /// Main-axis position relative to the viewport start, in pixels.
    pub offset: f32,
    /// Main-axis size in pixels.
    pub size: f32,
    /// Resolved grid column, when the host reports one.
    pub column: Option<usize>,
}

impl VisibleItem {
    /// Fraction of this item hidden before the viewport start, given the
    /// pixels already scrolled past it.
    pub fn fraction_hidden_start(&self, scrolled_past: f32) -> f32 {
        if self.size == 0.0 {
            0.0
        } else {
            scrolled_past / self.size
        }
    }

    /// Fraction of this item lying before `viewport_end`. Greater than 1
    /// when the item ends short of it.
    pub fn fraction_visible_end(&self, viewport_end: f32) -> f32 {
        if self.size == 0.0 {
            0.0
        } else {
            (viewport_end - self.offset) / self.size
        }
    }
}

/// Snapshot of a virtualized container's layout, taken once per frame.
/// Derived values are always computed from a single snapshot, never from a
/// mix of two.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LazyLayout {
    pub total_items: usize,
    /// Currently laid-out items, ascending by index in layout order.
    pub visible: Vec<VisibleItem>,
    /// Nominal first visible item index reported by the host.
    pub first_visible_index: usize,
    /// Pixels of the first visible item already scrolled past the
    /// viewport start.
    pub first_visible_offset: f32,
    /// Main-axis coordinate of the viewport end.
    pub viewport_end_offset: f32,
    /// Host padding after the content, inside the viewport end.
    pub after_content_padding: f32,
    pub reversed: bool,
    pub scroll_in_progress: bool,
}

impl LazyLayout {
    /// The entry actually matching `first_visible_index`. Differs from
    /// `visible.first()` when a sticky header occupies the first slot.
    pub fn real_first_visible(&self) -> Option<&VisibleItem> {
        self.visible
            .iter()
            .find(|item| item.index == self.first_visible_index)
    }

    /// True when a pinned header is drawn in front of the nominal first
    /// visible item.
    pub fn sticky_header_present(&self) -> bool {
        match (self.real_first_visible(), self.visible.first()) {
            (Some(real), Some(first)) => real.index != first.index,
            _ => false,
        }
    }

    /// Infer the grid column count by walking visible items while their
    /// column indices keep increasing from zero. The scan starts at the
    /// real first visible item so a pinned header ahead of it cannot cut
    /// the run short. Hosts do not expose the count directly; a failed
    /// scan falls back to a single column.
    pub fn column_count(&self) -> usize {
        let start = self
            .visible
            .iter()
            .position(|item| item.index == self.first_visible_index)
            .unwrap_or(0);
        let mut count = 0;
        for item in &self.visible[start..] {
            match item.column {
                Some(column) if column == count => count += 1,
                _ => break,
            }
        }
        if count == 0 && !self.visible.is_empty() {
            log::debug!("[scrollbar] column inference failed, assuming a single column");
        }
        count.max(1)
    }
}

/// A lazy virtualized list or grid container.
pub trait LazySource {
    fn layout(&self) -> LazyLayout;
    /// Jump so `index` sits at the viewport start, shifted `offset` pixels
    /// into the item.
    fn scroll_to_item(&self, index: usize, offset: f32);
    /// Scroll by a relative pixel delta.
    fn scroll_by(&self, delta: f32);
}
