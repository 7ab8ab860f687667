//! The mutable record of the currently tracked contact.

use crate::types::{TargetId, TimestampMs};

/// At most one contact session exists at a time. `started_at` marks the
/// session live and is also the timestamp the next contact-start diffs
/// against for the double-tap window, so it survives contact-end until a
/// terminal outcome clears the whole record.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContactSession {
    pub target: Option<TargetId>,
    pub start_x: f32,
    pub start_y: f32,
    /// Coordinates of the most recent move; absent until the first move.
    pub last: Option<(f32, f32)>,
    pub started_at: Option<TimestampMs>,
    pub double_tap_candidate: bool,
}

impl ContactSession {
    pub fn live(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
