//! Scrollbar configuration.

use std::time::Duration;

use thiserror::Error;

use crate::anim::Easing;
use crate::color::Color;

/// Which cross-axis edge the scrollbar rests on.
///
/// For vertical bars `Start` is the left edge and `End` the right; for
/// horizontal bars `Start` is the top edge and `End` the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    Start,
    #[default]
    End,
}

/// Drag-engagement policy evaluated when a pointer lands on the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// The scrollbar never reacts to drags.
    Disabled,
    /// Drags engage only when they start on the thumb itself.
    #[default]
    Thumb,
    /// Any drag on the track engages; starting off the thumb jumps the
    /// scroll position under the pointer first.
    Full,
}

/// Gates whether the drag hit-region accepts gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionActionable {
    /// Draggable even while faded out.
    #[default]
    Always,
    /// Draggable only while the bar is visible (plus a short grace window
    /// while it fades).
    WhenVisible,
}

/// Shape the host should draw the thumb with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ThumbShape {
    Rectangle,
    /// Rounded rectangle with the given corner radius in pixels.
    Rounded(f32),
    /// Fully rounded caps.
    #[default]
    Pill,
}

/// Invalid [`ScrollbarSettings`] combination.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("thumb_min_length ({min}) must be less or equal to thumb_max_length ({max})")]
    ThumbLengthBounds { min: f32, max: f32 },
}

/// Complete configuration for one scrollbar instance.
///
/// Plain value type: construct with [`ScrollbarSettings::default`], adjust
/// fields directly or through the chained setters, and hand it to the
/// scrollbar. Lengths are normalized fractions of the track; paddings,
/// thicknesses and displacements are pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarSettings {
    /// When false the scrollbar and its controller are bypassed entirely.
    pub enabled: bool,
    pub side: Side,
    /// Keeps the thumb permanently active instead of fading after idle.
    pub always_show_scrollbar: bool,
    pub scrollbar_padding: f32,
    pub thumb_thickness: f32,
    pub thumb_shape: ThumbShape,
    /// Minimum thumb length as a fraction of the track (0.1 = 10%).
    pub thumb_min_length: f32,
    pub thumb_max_length: f32,
    pub thumb_unselected_color: Color,
    pub thumb_selected_color: Color,
    pub selection_mode: SelectionMode,
    pub selection_actionable: SelectionActionable,
    /// Idle time before the hide animation starts.
    pub hide_delay: Duration,
    /// How far the bar slides off its edge while hiding, in pixels.
    pub hide_displacement: f32,
    pub hide_easing: Easing,
    /// Duration of the hide fade/slide.
    pub duration_animation: Duration,
}

impl Default for ScrollbarSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            side: Side::End,
            always_show_scrollbar: false,
            scrollbar_padding: 8.0,
            thumb_thickness: 6.0,
            thumb_shape: ThumbShape::Pill,
            thumb_min_length: 0.1,
            thumb_max_length: 1.0,
            thumb_unselected_color: Color::rgb(0x2A, 0x59, 0xB6),
            thumb_selected_color: Color::rgb(0x52, 0x81, 0xCA),
            selection_mode: SelectionMode::Thumb,
            selection_actionable: SelectionActionable::Always,
            hide_delay: Duration::from_millis(400),
            hide_displacement: 14.0,
            hide_easing: Easing::EaseInOut,
            duration_animation: Duration::from_millis(500),
        }
    }
}

impl ScrollbarSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check invariants that cannot be expressed in the type system.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.thumb_min_length > self.thumb_max_length {
            return Err(SettingsError::ThumbLengthBounds {
                min: self.thumb_min_length,
                max: self.thumb_max_length,
            });
        }
        Ok(())
    }

    // Chained setters

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn always_show_scrollbar(mut self, always: bool) -> Self {
        self.always_show_scrollbar = always;
        self
    }

    pub fn scrollbar_padding(mut self, pixels: f32) -> Self {
        self.scrollbar_padding = pixels;
        self
    }

    pub fn thumb_thickness(mut self, pixels: f32) -> Self {
        self.thumb_thickness = pixels;
        self
    }

    pub fn thumb_shape(mut self, shape: ThumbShape) -> Self {
        self.thumb_shape = shape;
        self
    }

    pub fn thumb_min_length(mut self, fraction: f32) -> Self {
        self.thumb_min_length = fraction;
        self
    }

    pub fn thumb_max_length(mut self, fraction: f32) -> Self {
        self.thumb_max_length = fraction;
        self
    }

    pub fn thumb_unselected_color(mut self, color: Color) -> Self {
        self.thumb_unselected_color = color;
        self
    }

    pub fn thumb_selected_color(mut self, color: Color) -> Self {
        self.thumb_selected_color = color;
        self
    }

    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn selection_actionable(mut self, actionable: SelectionActionable) -> Self {
        self.selection_actionable = actionable;
        self
    }

    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = delay;
        self
    }

    pub fn hide_displacement(mut self, pixels: f32) -> Self {
        self.hide_displacement = pixels;
        self
    }

    pub fn hide_easing(mut self, easing: Easing) -> Self {
        self.hide_easing = easing;
        self
    }

    pub fn duration_animation(mut self, duration: Duration) -> Self {
        self.duration_animation = duration;
        self
    }
}
