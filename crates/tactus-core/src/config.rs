//! Shared gesture thresholds for consistent contact classification.
//!
//! These values are in logical pixels and milliseconds. The defaults are
//! deliberately matched between the swipe test and the tap-bounds test so
//! there is no dead zone where a contact has moved too far to be a tap but
//! not far enough to be a swipe on the axis that matters.
//!
//! # DPI Considerations
//!
//! Distances are logical pixels. For very high-density touch screens,
//! consider scaling `swipe_threshold` and `move_disqualify_threshold` by
//! the device's DPI factor before constructing a [`GestureConfig`].

/// How long a contact must be held, without disqualifying movement, before
/// it is classified as a long-tap.
pub const LONG_TAP_DELAY_MS: u64 = 750;

/// Maximum gap between two consecutive contact-starts for them to be
/// linked into one double-tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 250;

/// Displacement on either axis beyond which a contact classifies as a
/// swipe rather than a tap.
///
/// The same value bounds the cumulative movement a tap may accumulate:
/// moving out to this distance and back to the origin still disqualifies
/// the tap even though the net displacement is zero.
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Per-move displacement from the start position that disqualifies a
/// long-tap.
///
/// Kept well under typical touch slop (Android uses ~8dp): a long-tap is a
/// deliberate hold, so even small drifts should demote it to the
/// tap/swipe decision at contact-end.
pub const MOVE_DISQUALIFY_THRESHOLD: f32 = 3.0;

/// Delay of the tap/swipe decision armed at contact-end.
///
/// Zero means "next pump": the decision yields exactly one scheduling turn
/// so that an abort (scroll) queued in the same turn can still suppress it.
pub const TAP_DECISION_DELAY_MS: u64 = 0;

/// Tunable thresholds for one recognizer instance.
///
/// Defaults mirror the module constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub long_tap_delay_ms: u64,
    pub double_tap_window_ms: u64,
    pub swipe_threshold: f32,
    pub move_disqualify_threshold: f32,
    pub tap_decision_delay_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_tap_delay_ms: LONG_TAP_DELAY_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            swipe_threshold: SWIPE_THRESHOLD,
            move_disqualify_threshold: MOVE_DISQUALIFY_THRESHOLD,
            tap_decision_delay_ms: TAP_DECISION_DELAY_MS,
        }
    }
}
