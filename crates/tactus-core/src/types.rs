//! Normalized contact events consumed by the recognizer.
//!
//! The input normalizer (or any other host-side adapter) is responsible for
//! collapsing platform touch/mouse/pointer traffic down to this surface:
//! one stream of primary-contact transitions, already filtered and
//! timestamped. The recognizer never sees a secondary finger or a hover
//! move.

/// Opaque handle of the element a gesture is attributed to.
pub type TargetId = u64;

/// Milliseconds on a host-supplied monotonic clock.
pub type TimestampMs = u64;

/// Lifecycle phase of a tracked contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One normalized primary-contact transition.
///
/// `Move` carries no timestamp: the long-tap window is entirely timer
/// driven, so movement only needs coordinates. `End` needs a timestamp to
/// anchor the zero-delay tap/swipe decision it may arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactEvent {
    Start {
        target: TargetId,
        x: f32,
        y: f32,
        timestamp: TimestampMs,
    },
    Move {
        x: f32,
        y: f32,
    },
    End {
        timestamp: TimestampMs,
    },
    Cancel,
}

impl ContactEvent {
    pub fn phase(&self) -> ContactPhase {
        match self {
            ContactEvent::Start { .. } => ContactPhase::Start,
            ContactEvent::Move { .. } => ContactPhase::Move,
            ContactEvent::End { .. } => ContactPhase::End,
            ContactEvent::Cancel => ContactPhase::Cancel,
        }
    }
}
