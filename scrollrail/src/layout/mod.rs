//! Scrollbar visual layout: placement, hide animation, hit region.
//!
//! The layout engine consumes the controller's normalized values and a
//! track rectangle and produces absolute rectangles for the thumb, the
//! optional floating indicator, and the enlarged drag hit region, together
//! with the animated alpha/displacement/color for this frame.

mod horizontal;
mod vertical;

use std::time::Instant;

use crate::anim::{ColorTransition, FadeAnimation, FadePhase};
use crate::color::Color;
use crate::settings::{ScrollbarSettings, SelectionActionable};

/// Axis-aligned rectangle in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Scroll axis of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Everything the host needs to draw the overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarFrame {
    pub thumb: Rect,
    /// Invisible drag target: the thumb thickness plus padding on both
    /// sides, spanning the whole track length.
    pub hit_region: Rect,
    /// Placement for the host's indicator content, when a size was given.
    pub indicator: Option<Rect>,
    pub alpha: f32,
    pub color: Color,
    pub phase: FadePhase,
    /// Whether the hit region accepts drags right now.
    pub interactive: bool,
    /// When to schedule the next repaint; None once animations settled.
    pub next_deadline: Option<Instant>,
}

pub(crate) struct Placement {
    pub thumb: Rect,
    pub hit_region: Rect,
    pub indicator: Option<Rect>,
}

/// Stateful layout engine for one scrollbar instance.
pub struct ScrollbarLayout {
    settings: ScrollbarSettings,
    orientation: Orientation,
    fade: FadeAnimation,
    color: ColorTransition,
}

impl ScrollbarLayout {
    pub fn new(settings: ScrollbarSettings, orientation: Orientation) -> Self {
        let fade = FadeAnimation::new(
            settings.hide_delay,
            settings.duration_animation,
            settings.hide_easing,
        );
        let color = ColorTransition::new(settings.thumb_unselected_color);
        Self {
            settings,
            orientation,
            fade,
            color,
        }
    }

    pub fn settings(&self) -> &ScrollbarSettings {
        &self.settings
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the hit region accepts a drag right now.
    pub fn interactive(&self, now: Instant) -> bool {
        match self.settings.selection_actionable {
            SelectionActionable::Always => true,
            SelectionActionable::WhenVisible => self.fade.recently_active(now),
        }
    }

    /// Advance the animations and lay the overlay out inside `track`.
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &mut self,
        track: Rect,
        thumb_size: f32,
        offset: f32,
        in_action: bool,
        selected: bool,
        indicator_size: Option<(f32, f32)>,
        now: Instant,
    ) -> ScrollbarFrame {
        self.fade.set_active(in_action, now);
        let target = if selected {
            self.settings.thumb_selected_color
        } else {
            self.settings.thumb_unselected_color
        };
        self.color.set_target(target, now);

        let displacement = self.fade.displacement(now) * self.settings.hide_displacement;
        let placement = match self.orientation {
            Orientation::Vertical => vertical::place(
                &self.settings,
                track,
                thumb_size,
                offset,
                displacement,
                indicator_size,
            ),
            Orientation::Horizontal => horizontal::place(
                &self.settings,
                track,
                thumb_size,
                offset,
                displacement,
                indicator_size,
            ),
        };

        let next_deadline = if self.color.animating(now) {
            Some(now)
        } else {
            self.fade.next_deadline(now)
        };

        ScrollbarFrame {
            thumb: placement.thumb,
            hit_region: placement.hit_region,
            indicator: placement.indicator,
            alpha: self.fade.alpha(now),
            color: self.color.sample(now),
            phase: self.fade.phase(now),
            interactive: self.interactive(now),
            next_deadline,
        }
    }
}
