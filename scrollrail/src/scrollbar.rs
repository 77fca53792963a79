//! The scrollbar overlay itself: a controller paired with a layout engine.

use std::time::Instant;

use crate::controller::{
    ContinuousController, LazyGridController, LazyListController, StateController,
};
use crate::layout::{Orientation, Rect, ScrollbarFrame, ScrollbarLayout};
use crate::settings::{ScrollbarSettings, SettingsError};
use crate::source::{ContinuousSource, LazySource};

/// A scrollbar overlay attached to one scrollable container.
///
/// The host drives it with [`frame`](Scrollbar::frame) once per paint and
/// feeds pointer events through the `drag_*` methods. All positions are in
/// the same pixel space as the track rectangle.
pub struct Scrollbar<S> {
    controller: S,
    layout: ScrollbarLayout,
}

impl<C: ContinuousSource> Scrollbar<ContinuousController<C>> {
    /// Overlay for a plain scroll region with a continuous pixel offset.
    pub fn continuous(
        source: C,
        settings: ScrollbarSettings,
        orientation: Orientation,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let controller = ContinuousController::new(source, &settings);
        Ok(Self {
            controller,
            layout: ScrollbarLayout::new(settings, orientation),
        })
    }
}

impl<C: LazySource> Scrollbar<LazyListController<C>> {
    /// Overlay for a lazy list that only lays out the visible items.
    pub fn lazy_list(
        source: C,
        settings: ScrollbarSettings,
        orientation: Orientation,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let controller = LazyListController::new(source, &settings);
        Ok(Self {
            controller,
            layout: ScrollbarLayout::new(settings, orientation),
        })
    }
}

impl<C: LazySource> Scrollbar<LazyGridController<C>> {
    /// Overlay for a lazy grid; scrollbar math runs in row units.
    pub fn lazy_grid(
        source: C,
        settings: ScrollbarSettings,
        orientation: Orientation,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let controller = LazyGridController::new(source, &settings);
        Ok(Self {
            controller,
            layout: ScrollbarLayout::new(settings, orientation),
        })
    }
}

impl<S: StateController> Scrollbar<S> {
    /// Refresh from the source and lay the overlay out inside `track`.
    ///
    /// Returns `None` when the scrollbar is disabled, in which case nothing
    /// should be drawn and no events fed back.
    pub fn frame(
        &mut self,
        track: Rect,
        indicator_size: Option<(f32, f32)>,
        now: Instant,
    ) -> Option<ScrollbarFrame> {
        if !self.layout.settings().enabled {
            return None;
        }
        self.controller.refresh();
        Some(self.layout.frame(
            track,
            self.controller.normalized_thumb_size(),
            self.controller.normalized_offset(),
            self.controller.thumb_in_action(),
            self.controller.is_selected(),
            indicator_size,
            now,
        ))
    }

    /// Feed a press at `offset_px` along a track of `track_length_px`.
    /// Returns true when the scrollbar consumed the press.
    pub fn drag_started(&mut self, offset_px: f32, track_length_px: f32, now: Instant) -> bool {
        if !self.layout.settings().enabled || !self.layout.interactive(now) {
            return false;
        }
        self.controller.drag_started(offset_px, track_length_px);
        self.controller.is_selected()
    }

    /// Feed pointer movement while a drag is engaged.
    pub fn drag_delta(&mut self, delta_px: f32, track_length_px: f32) {
        if !self.layout.settings().enabled {
            return;
        }
        self.controller.drag_delta(delta_px, track_length_px);
    }

    /// Feed the pointer release. Safe to call without an engaged drag.
    pub fn drag_stopped(&mut self) {
        if !self.layout.settings().enabled {
            return;
        }
        self.controller.drag_stopped();
    }

    /// Value for the floating indicator, in the controller's own unit.
    pub fn indicator_value(&self) -> S::Indicator {
        self.controller.indicator_value()
    }

    pub fn normalized_thumb_size(&self) -> f32 {
        self.controller.normalized_thumb_size()
    }

    pub fn normalized_offset(&self) -> f32 {
        self.controller.normalized_offset()
    }

    pub fn thumb_in_action(&self) -> bool {
        self.controller.thumb_in_action()
    }

    pub fn is_selected(&self) -> bool {
        self.controller.is_selected()
    }

    pub fn controller(&self) -> &S {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut S {
        &mut self.controller
    }

    pub fn settings(&self) -> &ScrollbarSettings {
        self.layout.settings()
    }

    pub fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }
}
