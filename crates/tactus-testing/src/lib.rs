//! Testing utilities for Tactus.
//!
//! A [`RecordingSink`] to capture dispatched gestures and a
//! [`GestureScript`] robot driver that replays input under a virtual
//! clock. Integration tests and the replay demo both build on these.

pub mod recorder;
pub mod script;

pub use recorder::{RecordedGesture, RecordingSink};
pub use script::GestureScript;
