//! Pure normalization math shared by every controller.
//!
//! Everything here is stateless `f32` arithmetic between three coordinate
//! spaces: pixel offsets, real content fractions, and the thumb's track
//! fractions. Clamping a thumb to a minimum (or maximum) length shrinks or
//! grows its travel range, so real fractions must be rescaled on the way
//! in and back out.

/// Raw thumb size: visible fraction of the total content extent, clamped
/// to [0, 1]. Zero content means nothing can scroll and the thumb fills
/// the track.
pub fn thumb_size(visible: f32, content: f32) -> f32 {
    if content <= 0.0 {
        return 1.0;
    }
    (visible / content).clamp(0.0, 1.0)
}

/// Clamp a raw thumb size into the configured length bounds.
pub fn apply_bounds(raw: f32, min: f32, max: f32) -> f32 {
    raw.max(min).min(max)
}

/// Map a real track fraction into the travel range left by a
/// length-clamped thumb, mirroring first under reverse layout.
///
/// `raw_size` is the unclamped thumb size the fraction was derived from
/// and `effective_size` the bounded size actually drawn. When the two are
/// equal no clamping is in effect and the fraction passes through
/// unchanged (modulo the mirror).
pub fn offset_correction(top: f32, raw_size: f32, effective_size: f32, reversed: bool) -> f32 {
    let top_real_max = (1.0 - raw_size).clamp(0.0, 1.0);
    let top = if reversed { top_real_max - top } else { top };
    if raw_size == effective_size {
        return top;
    }
    if top_real_max <= 0.0 {
        return 0.0;
    }
    let top_max = (1.0 - effective_size).max(0.0);
    top * top_max / top_real_max
}

/// Exact algebraic inverse of the unmirrored [`offset_correction`]: a
/// dragged track fraction back into a real content fraction. Drag handling
/// mirrors reversed positions before reaching this point.
pub fn offset_correction_inverse(top: f32, raw_size: f32, effective_size: f32) -> f32 {
    if raw_size == effective_size {
        return top;
    }
    let top_max = (1.0 - effective_size).max(0.0);
    if top_max <= 0.0 {
        return top;
    }
    let top_real_max = (1.0 - raw_size).clamp(0.0, 1.0);
    top * top_real_max / top_max
}

/// Continuous-scroll mapping: a full content fraction in [0, 1] into the
/// travel range `[0, 1-effective_size]`.
pub fn track_correction(top: f32, effective_size: f32) -> f32 {
    let top_max = (1.0 - effective_size).clamp(0.0, 1.0);
    top * top_max
}

/// Inverse of [`track_correction`]. A thumb filling the whole track has no
/// travel range; its only position maps back unchanged.
pub fn track_correction_inverse(top: f32, effective_size: f32) -> f32 {
    let top_max = (1.0 - effective_size).clamp(0.0, 1.0);
    if top_max <= 0.0 {
        return top;
    }
    (top / top_max).max(0.0)
}
