use scrollrail::geometry::{
    apply_bounds, offset_correction, offset_correction_inverse, thumb_size, track_correction,
    track_correction_inverse,
};

// ============================================================================
// Thumb Size
// ============================================================================

#[test]
fn test_thumb_size_visible_fraction() {
    assert_eq!(thumb_size(250.0, 1000.0), 0.25);
    assert_eq!(thumb_size(500.0, 1000.0), 0.5);
}

#[test]
fn test_thumb_size_clamped_to_unit() {
    // Viewport larger than the content still fills the track exactly
    assert_eq!(thumb_size(1200.0, 1000.0), 1.0);
    assert_eq!(thumb_size(-5.0, 1000.0), 0.0);
}

#[test]
fn test_thumb_size_empty_content_fills_track() {
    assert_eq!(thumb_size(500.0, 0.0), 1.0);
    assert_eq!(thumb_size(0.0, 0.0), 1.0);
}

#[test]
fn test_apply_bounds() {
    assert_eq!(apply_bounds(0.02, 0.1, 1.0), 0.1);
    assert_eq!(apply_bounds(0.5, 0.1, 1.0), 0.5);
    assert_eq!(apply_bounds(0.9, 0.1, 0.4), 0.4);
}

#[test]
fn test_apply_bounds_inverted_limits_does_not_panic() {
    // Unvalidated settings may carry min > max; min wins
    assert_eq!(apply_bounds(0.5, 0.8, 0.2), 0.2);
}

// ============================================================================
// Offset Correction (length-clamped thumbs)
// ============================================================================

#[test]
fn test_offset_correction_identity_when_unclamped() {
    // raw == effective means no clamping is in effect
    assert_eq!(offset_correction(0.3, 0.25, 0.25, false), 0.3);
    assert_eq!(offset_correction(0.0, 0.25, 0.25, false), 0.0);
}

#[test]
fn test_offset_correction_rescales_travel() {
    // Tiny raw thumb (2%) clamped up to 10%: real travel 0.98, drawn 0.9
    let corrected = offset_correction(0.49, 0.02, 0.1, false);
    assert!((corrected - 0.45).abs() < 1e-6);
}

#[test]
fn test_offset_correction_rescales_for_max_clamped_thumb() {
    // Oversized raw thumb (60%) capped at 40%: real travel 0.4, drawn 0.6,
    // so fractions widen on the way in and shrink back on the way out
    let corrected = offset_correction(0.2, 0.6, 0.4, false);
    assert!((corrected - 0.3).abs() < 1e-6);
    let back = offset_correction_inverse(corrected, 0.6, 0.4);
    assert!((back - 0.2).abs() < 1e-6);
}

#[test]
fn test_offset_correction_endpoints_preserved() {
    // Top of content stays at the top of the track, bottom at the bottom
    let top = offset_correction(0.0, 0.02, 0.1, false);
    let bottom = offset_correction(0.98, 0.02, 0.1, false);
    assert_eq!(top, 0.0);
    assert!((bottom - 0.9).abs() < 1e-6);
}

#[test]
fn test_offset_correction_reversed_mirrors() {
    // Real fraction 0 sits at the far end under reverse layout
    let corrected = offset_correction(0.0, 0.02, 0.1, true);
    assert!((corrected - 0.9).abs() < 1e-6);
    let corrected = offset_correction(0.98, 0.02, 0.1, true);
    assert_eq!(corrected, 0.0);
}

#[test]
fn test_offset_correction_oversized_thumb_pins_to_start() {
    // Raw size >= 1 leaves no real travel range
    assert_eq!(offset_correction(0.2, 1.0, 0.8, false), 0.0);
}

#[test]
fn test_offset_correction_inverse_round_trip() {
    for raw in [0.02, 0.15, 0.6] {
        for top in [0.0, 0.1, 0.3, 1.0 - raw] {
            let effective = apply_bounds(raw, 0.1, 0.4);
            let corrected = offset_correction(top, raw, effective, false);
            let back = offset_correction_inverse(corrected, raw, effective);
            assert!(
                (back - top).abs() < 1e-5,
                "round trip failed for raw={}, top={}",
                raw,
                top
            );
        }
    }
}

#[test]
fn test_offset_correction_inverse_track_end_reaches_content_end() {
    // Dragging the clamped thumb to the end of its travel must address the
    // very end of the content
    let real = offset_correction_inverse(0.9, 0.02, 0.1);
    assert!((real - 0.98).abs() < 1e-6);
}

#[test]
fn test_offset_correction_monotonic() {
    let mut prev = -1.0;
    for i in 0..=20 {
        let top = i as f32 * 0.98 / 20.0;
        let corrected = offset_correction(top, 0.02, 0.1, false);
        assert!(corrected >= prev, "not monotonic at top={}", top);
        prev = corrected;
    }
}

// ============================================================================
// Track Correction (continuous regions)
// ============================================================================

#[test]
fn test_track_correction_scales_into_travel() {
    assert_eq!(track_correction(0.0, 0.25), 0.0);
    assert_eq!(track_correction(1.0, 0.25), 0.75);
    assert_eq!(track_correction(0.5, 0.5), 0.25);
}

#[test]
fn test_track_correction_round_trip() {
    for size in [0.1, 0.25, 0.5, 0.99] {
        for top in [0.0, 0.33, 0.7, 1.0] {
            let corrected = track_correction(top, size);
            let back = track_correction_inverse(corrected, size);
            assert!(
                (back - top).abs() < 1e-5,
                "round trip failed for size={}, top={}",
                size,
                top
            );
        }
    }
}

#[test]
fn test_track_correction_inverse_full_thumb_passes_through() {
    // A thumb filling the track has no travel range to divide by
    assert_eq!(track_correction_inverse(0.0, 1.0), 0.0);
    assert_eq!(track_correction_inverse(0.3, 1.0), 0.3);
}

#[test]
fn test_track_correction_inverse_never_negative() {
    assert_eq!(track_correction_inverse(-0.2, 0.5), 0.0);
}
