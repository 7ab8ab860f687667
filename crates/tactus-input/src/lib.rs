//! Input normalization for Tactus.
//!
//! The recognizer in `tactus-core` wants one clean stream of
//! primary-contact transitions. Real platforms deliver anything but:
//! multi-finger touch lists, mouse hover, extra buttons, scroll. This
//! crate owns the filtering so platform adapters stay thin.

pub mod normalizer;
pub mod types;

pub use normalizer::InputNormalizer;
pub use types::{MouseButton, TouchId};
