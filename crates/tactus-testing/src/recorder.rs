//! Recording sink for assertions.

use std::cell::RefCell;
use std::rc::Rc;

use tactus_core::{Gesture, GestureKind, GestureSink, TapControl, TargetId};

#[derive(Clone, Debug)]
pub struct RecordedGesture {
    pub target: TargetId,
    pub gesture: Gesture,
}

/// Sink that records every dispatched gesture into shared storage.
///
/// Clones share the storage, so a test keeps one handle for assertions
/// while the recognizer owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<RecordedGesture>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds of every recorded gesture, in dispatch order.
    pub fn kinds(&self) -> Vec<GestureKind> {
        self.records
            .borrow()
            .iter()
            .map(|record| record.gesture.kind())
            .collect()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<RecordedGesture> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Control of the most recently recorded tap, if any.
    pub fn last_tap_control(&self) -> Option<TapControl> {
        self.records
            .borrow()
            .iter()
            .rev()
            .find_map(|record| match &record.gesture {
                Gesture::Tap(control) => Some(control.clone()),
                _ => None,
            })
    }
}

impl GestureSink for RecordingSink {
    fn dispatch(&mut self, target: TargetId, gesture: Gesture) {
        self.records.borrow_mut().push(RecordedGesture { target, gesture });
    }
}
