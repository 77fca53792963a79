//! Frame-driven animation support for the hide/show effect.
//!
//! Nothing here owns a clock: every read takes an explicit `now` so the
//! host's frame loop (and the tests) decide what time it is.

use std::time::{Duration, Instant};

use crate::color::Color;

/// Duration of the fade-in when the bar becomes active.
const SHOW_DURATION: Duration = Duration::from_millis(75);

/// Duration of the selected/unselected color blend.
const COLOR_BLEND: Duration = Duration::from_millis(150);

/// Easing curve for the hide animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Visibility state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Shown,
    Hiding,
    Hidden,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from_alpha: f32,
    from_displacement: f32,
    /// First instant the tween advances; the hide delay is baked in here.
    start: Instant,
    duration: Duration,
}

/// The show/hide effect: alpha and outward displacement animated together.
///
/// Activity flips drive it. Turning active fades in immediately over a
/// short fixed duration; turning inactive waits out the hide delay, then
/// fades and displaces over the configured duration. Each flip supersedes
/// whatever the previous one scheduled.
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    active: bool,
    deactivated_at: Option<Instant>,
    tween: Option<Tween>,
    hide_delay: Duration,
    hide_duration: Duration,
    easing: Easing,
}

impl FadeAnimation {
    /// Starts hidden and inactive.
    pub fn new(hide_delay: Duration, hide_duration: Duration, easing: Easing) -> Self {
        Self {
            active: false,
            deactivated_at: None,
            tween: None,
            hide_delay,
            hide_duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the activity input. A no-op unless the value changes.
    pub fn set_active(&mut self, active: bool, now: Instant) {
        if active == self.active {
            return;
        }
        let (from_alpha, from_displacement) = self.sample(now);
        self.active = active;
        self.tween = Some(if active {
            Tween {
                from_alpha,
                from_displacement,
                start: now,
                duration: SHOW_DURATION,
            }
        } else {
            Tween {
                from_alpha,
                from_displacement,
                start: now + self.hide_delay,
                duration: self.hide_duration,
            }
        });
        self.deactivated_at = (!active).then_some(now);
    }

    /// Current opacity in [0, 1].
    pub fn alpha(&self, now: Instant) -> f32 {
        self.sample(now).0
    }

    /// Current outward displacement as a fraction of the configured hide
    /// displacement: 0 fully on-screen, 1 fully slid out.
    pub fn displacement(&self, now: Instant) -> f32 {
        self.sample(now).1
    }

    pub fn phase(&self, now: Instant) -> FadePhase {
        if self.active {
            return FadePhase::Shown;
        }
        match &self.tween {
            // Still fully visible while the hide delay runs out
            Some(tween) if now < tween.start => FadePhase::Shown,
            Some(tween) if now < tween.start + tween.duration => FadePhase::Hiding,
            _ => FadePhase::Hidden,
        }
    }

    /// True while active or within the grace window after deactivation
    /// (the hide delay plus the hide duration). Gates the hit region in
    /// the when-visible actionable mode, so a drag started just as hiding
    /// begins still lands.
    pub fn recently_active(&self, now: Instant) -> bool {
        if self.active {
            return true;
        }
        match self.deactivated_at {
            Some(at) => now < at + self.hide_delay + self.hide_duration,
            None => false,
        }
    }

    /// When the host should sample again: the start of a scheduled tween,
    /// `now` while one runs, `None` once everything settled. The hide
    /// tween ends exactly when the activity grace window expires, so no
    /// separate deadline is needed for it.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let tween = self.tween.as_ref()?;
        if now < tween.start {
            return Some(tween.start);
        }
        if now < tween.start + tween.duration {
            return Some(now);
        }
        None
    }

    fn sample(&self, now: Instant) -> (f32, f32) {
        let target_alpha = if self.active { 1.0 } else { 0.0 };
        let target_displacement = if self.active { 0.0 } else { 1.0 };
        match &self.tween {
            None => (target_alpha, target_displacement),
            Some(tween) => {
                if now < tween.start {
                    return (tween.from_alpha, tween.from_displacement);
                }
                let elapsed = now.saturating_duration_since(tween.start);
                if elapsed >= tween.duration {
                    return (target_alpha, target_displacement);
                }
                let t = elapsed.as_secs_f32() / tween.duration.as_secs_f32();
                let eased = self.easing.apply(t);
                (
                    tween.from_alpha + (target_alpha - tween.from_alpha) * eased,
                    tween.from_displacement
                        + (target_displacement - tween.from_displacement) * eased,
                )
            }
        }
    }
}

/// Smooth blend between the unselected and selected thumb colors.
#[derive(Debug, Clone)]
pub(crate) struct ColorTransition {
    from: Color,
    target: Color,
    start: Option<Instant>,
}

impl ColorTransition {
    pub fn new(initial: Color) -> Self {
        Self {
            from: initial,
            target: initial,
            start: None,
        }
    }

    /// Retarget the blend, starting from whatever color is showing now.
    pub fn set_target(&mut self, target: Color, now: Instant) {
        if target == self.target {
            return;
        }
        self.from = self.sample(now);
        self.target = target;
        self.start = Some(now);
    }

    pub fn sample(&self, now: Instant) -> Color {
        let Some(start) = self.start else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= COLOR_BLEND {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / COLOR_BLEND.as_secs_f32();
        self.from.lerp(self.target, t)
    }

    pub fn animating(&self, now: Instant) -> bool {
        match self.start {
            Some(start) => now.saturating_duration_since(start) < COLOR_BLEND,
            None => false,
        }
    }
}
