//! Tactus core: single-contact gesture recognition.
//!
//! Translates a stream of normalized pointer-contact events into tap,
//! double-tap, single-tap, long-tap, and directional swipe outcomes. The
//! interesting part is disambiguation under timing pressure: several
//! gesture classes share a prefix of raw events, so classification is
//! deferred through a small set of mutually-cancelling timers and resolved
//! when a window elapses or a competing signal (movement, a second
//! contact-start, an external scroll) arrives first.
//!
//! The crate is platform-free and single-threaded: hosts feed
//! [`ContactEvent`]s in arrival order and pump the recognizer with their
//! own monotonic time. See [`recognizer::GestureRecognizer`] for the host
//! contract and `tactus-input` for a ready-made normalizer over raw
//! touch/mouse/pointer traffic.

pub mod classifier;
pub mod clock;
pub mod config;
pub mod recognizer;
mod session;
pub mod sink;
pub mod timers;
pub mod types;

pub use classifier::SwipeDirection;
pub use clock::MonotonicClock;
pub use config::GestureConfig;
pub use recognizer::GestureRecognizer;
pub use sink::{Gesture, GestureKind, GestureSink, TapControl};
pub use types::{ContactEvent, ContactPhase, TargetId, TimestampMs};

pub mod prelude {
    pub use crate::classifier::SwipeDirection;
    pub use crate::config::GestureConfig;
    pub use crate::recognizer::GestureRecognizer;
    pub use crate::sink::{Gesture, GestureKind, GestureSink, TapControl};
    pub use crate::types::{ContactEvent, ContactPhase, TargetId, TimestampMs};
}
