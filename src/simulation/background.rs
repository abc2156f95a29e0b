//! Horizontal background gradient: black at the left wall, white at the right.

/// Background gray at arena x-coordinate `x`, in `[0, 1]`.
///
/// `x` is clamped to `[0, arena_size - 1]` before being mapped linearly, so
/// `favorability(0, w) == 0` and `favorability(w - 1, w) == 1`. NaN maps to 0.
pub fn favorability(x: f32, arena_size: f32) -> f32 {
    let span = arena_size - 1.0;
    if span <= 0.0 {
        return 0.0;
    }
    x.max(0.0).min(span) / span
}
