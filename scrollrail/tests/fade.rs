use std::time::{Duration, Instant};

use scrollrail::anim::FadeAnimation;
use scrollrail::{Easing, FadePhase};

const DELAY: Duration = Duration::from_millis(400);
const HIDE: Duration = Duration::from_millis(500);

fn fade() -> FadeAnimation {
    FadeAnimation::new(DELAY, HIDE, Easing::Linear)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

// ============================================================================
// Fade State Machine
// ============================================================================

#[test]
fn test_starts_hidden() {
    let fade = fade();
    let now = Instant::now();
    assert_eq!(fade.alpha(now), 0.0);
    assert_eq!(fade.displacement(now), 1.0);
    assert_eq!(fade.phase(now), FadePhase::Hidden);
    assert!(!fade.is_active());
    assert!(!fade.recently_active(now));
    assert_eq!(fade.next_deadline(now), None);
}

#[test]
fn test_activation_fades_in_quickly() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);

    assert_eq!(fade.phase(t0), FadePhase::Shown);
    assert_eq!(fade.alpha(t0), 0.0);
    // Fade-in runs over a short fixed duration, not the hide duration
    assert!((fade.alpha(t0 + ms(37)) - 0.5).abs() < 0.02);
    assert_eq!(fade.alpha(t0 + ms(75)), 1.0);
    assert_eq!(fade.displacement(t0 + ms(75)), 0.0);
}

#[test]
fn test_deactivation_waits_out_the_delay() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    let t1 = t0 + ms(1000);
    fade.set_active(false, t1);

    // Fully visible through the whole delay window
    assert_eq!(fade.alpha(t1 + ms(399)), 1.0);
    assert_eq!(fade.phase(t1 + ms(399)), FadePhase::Shown);

    // Then fades and displaces over the hide duration
    assert_eq!(fade.phase(t1 + ms(400)), FadePhase::Hiding);
    assert!((fade.alpha(t1 + ms(650)) - 0.5).abs() < 1e-5);
    assert!((fade.displacement(t1 + ms(650)) - 0.5).abs() < 1e-5);

    assert_eq!(fade.alpha(t1 + ms(900)), 0.0);
    assert_eq!(fade.displacement(t1 + ms(900)), 1.0);
    assert_eq!(fade.phase(t1 + ms(900)), FadePhase::Hidden);
}

#[test]
fn test_reactivation_resumes_from_current_values() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    let t1 = t0 + ms(1000);
    fade.set_active(false, t1);

    // Halfway through the hide, activity comes back
    let t2 = t1 + ms(650);
    fade.set_active(true, t2);
    assert!((fade.alpha(t2) - 0.5).abs() < 1e-5);
    assert_eq!(fade.phase(t2), FadePhase::Shown);
    assert_eq!(fade.alpha(t2 + ms(75)), 1.0);
}

#[test]
fn test_set_active_is_noop_without_a_change() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    // A repeat must not restart the fade-in
    fade.set_active(true, t0 + ms(50));
    assert_eq!(fade.alpha(t0 + ms(75)), 1.0);
}

#[test]
fn test_recently_active_covers_delay_plus_hide() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    assert!(fade.recently_active(t0));

    let t1 = t0 + ms(1000);
    fade.set_active(false, t1);
    assert!(fade.recently_active(t1 + ms(899)));
    assert!(!fade.recently_active(t1 + ms(900)));
}

#[test]
fn test_next_deadline_schedules_repaints() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    // Mid fade-in: repaint immediately
    assert_eq!(fade.next_deadline(t0 + ms(30)), Some(t0 + ms(30)));

    let t1 = t0 + ms(1000);
    fade.set_active(false, t1);
    // During the delay the next interesting instant is the hide start
    assert_eq!(fade.next_deadline(t1 + ms(100)), Some(t1 + ms(400)));
    // Mid hide: repaint immediately
    assert_eq!(fade.next_deadline(t1 + ms(600)), Some(t1 + ms(600)));
    // Settled hidden, grace expired: nothing scheduled
    assert_eq!(fade.next_deadline(t1 + ms(901)), None);
}

#[test]
fn test_deadline_ends_with_the_grace_window() {
    let mut fade = fade();
    let t0 = Instant::now();
    fade.set_active(true, t0);
    let t1 = t0 + ms(1000);
    fade.set_active(false, t1);

    // The hide tween and the actionable grace expire at the same instant
    assert_eq!(fade.next_deadline(t1 + ms(899)), Some(t1 + ms(899)));
    assert_eq!(fade.next_deadline(t1 + ms(900)), None);
    assert!(!fade.recently_active(t1 + ms(900)));
}
