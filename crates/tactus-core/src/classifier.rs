//! Pure decision functions for contact classification.
//!
//! Everything here is total over its inputs and free of state; the
//! recognizer owns the session and timers and calls in here at decision
//! points.

/// Direction of a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Infers the swipe direction from the start and last-known coordinates.
///
/// The dominant axis wins; a tie along the diagonal resolves to the
/// horizontal axis.
pub fn swipe_direction(x1: f32, x2: f32, y1: f32, y2: f32) -> SwipeDirection {
    if (x1 - x2).abs() >= (y1 - y2).abs() {
        if x1 - x2 > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    } else if y1 - y2 > 0.0 {
        SwipeDirection::Up
    } else {
        SwipeDirection::Down
    }
}

/// True when the displacement between start and last-known position
/// exceeds `threshold` on either axis.
pub fn is_swipe(start_x: f32, start_y: f32, last_x: f32, last_y: f32, threshold: f32) -> bool {
    (start_x - last_x).abs() > threshold || (start_y - last_y).abs() > threshold
}

/// True while the accumulated movement still qualifies as a tap.
///
/// The sums are cumulative over every move of the contact, so moving out
/// past the threshold and back to the origin still disqualifies.
pub fn within_tap_bounds(cumulative_dx: f32, cumulative_dy: f32, threshold: f32) -> bool {
    cumulative_dx < threshold && cumulative_dy < threshold
}

/// True when the gap between two consecutive contact-starts links them
/// into a double-tap. A zero gap means "no prior contact" and never links.
pub fn is_double_tap_gap(gap_ms: u64, window_ms: u64) -> bool {
    gap_ms > 0 && gap_ms <= window_ms
}
