//! Collapses raw touch/mouse traffic to the recognizer's normalized
//! surface.
//!
//! Rules owned here, so the recognizer never has to know about devices:
//! - Only the primary contact reaches the recognizer. A touch is primary
//!   when it is the only finger down at the moment it lands; later fingers
//!   are swallowed until every finger has lifted.
//! - Mouse events count only for the primary button, and mouse moves are
//!   forwarded only while that button is held. A hover move is invisible
//!   to the recognizer.
//! - A platform scroll is the abort signal: scrolling expresses the
//!   intent not to tap or swipe, so everything pending is cancelled.

use smallvec::SmallVec;
use tactus_core::{GestureRecognizer, GestureSink, TargetId, TimestampMs};

use crate::types::{MouseButton, TouchId};

pub struct InputNormalizer<S: GestureSink> {
    recognizer: GestureRecognizer<S>,
    /// Every finger currently down, in landing order.
    active_touches: SmallVec<[TouchId; 4]>,
    /// The finger whose events are forwarded, if any.
    primary_touch: Option<TouchId>,
    mouse_pressed: bool,
}

impl<S: GestureSink> InputNormalizer<S> {
    pub fn new(recognizer: GestureRecognizer<S>) -> Self {
        Self {
            recognizer,
            active_touches: SmallVec::new(),
            primary_touch: None,
            mouse_pressed: false,
        }
    }

    pub fn recognizer(&self) -> &GestureRecognizer<S> {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut GestureRecognizer<S> {
        &mut self.recognizer
    }

    pub fn into_recognizer(self) -> GestureRecognizer<S> {
        self.recognizer
    }

    pub fn touch_down(
        &mut self,
        id: TouchId,
        target: TargetId,
        x: f32,
        y: f32,
        now: TimestampMs,
    ) {
        if !self.active_touches.contains(&id) {
            self.active_touches.push(id);
        }
        if self.active_touches.len() == 1 {
            self.primary_touch = Some(id);
            self.recognizer.contact_start(target, x, y, now);
        } else {
            log::trace!("ignoring secondary touch {id}");
        }
    }

    pub fn touch_move(&mut self, id: TouchId, x: f32, y: f32) {
        if self.primary_touch == Some(id) {
            self.recognizer.contact_move(x, y);
        }
    }

    pub fn touch_up(&mut self, id: TouchId, now: TimestampMs) {
        self.active_touches.retain(|active| *active != id);
        if self.primary_touch == Some(id) {
            self.primary_touch = None;
            self.recognizer.contact_end(now);
        }
    }

    pub fn touch_cancel(&mut self, id: TouchId) {
        self.active_touches.retain(|active| *active != id);
        if self.primary_touch == Some(id) {
            self.primary_touch = None;
            self.recognizer.contact_cancel();
        }
    }

    pub fn mouse_down(
        &mut self,
        button: MouseButton,
        target: TargetId,
        x: f32,
        y: f32,
        now: TimestampMs,
    ) {
        if button != MouseButton::Primary {
            return;
        }
        self.mouse_pressed = true;
        self.recognizer.contact_start(target, x, y, now);
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        if self.mouse_pressed {
            self.recognizer.contact_move(x, y);
        }
    }

    pub fn mouse_up(&mut self, button: MouseButton, now: TimestampMs) {
        if button != MouseButton::Primary || !self.mouse_pressed {
            return;
        }
        self.mouse_pressed = false;
        self.recognizer.contact_end(now);
    }

    /// The surface scrolled: the user means to scroll, not to gesture.
    pub fn scroll(&mut self) {
        self.recognizer.abort();
    }

    /// Blanket interruption (window blur, modal dialog): drop every
    /// tracked contact and cancel everything pending.
    pub fn interrupt(&mut self) {
        self.active_touches.clear();
        self.primary_touch = None;
        self.mouse_pressed = false;
        self.recognizer.contact_cancel();
    }

    pub fn pump(&mut self, now: TimestampMs) {
        self.recognizer.pump(now);
    }

    pub fn next_deadline(&self) -> Option<TimestampMs> {
        self.recognizer.next_deadline()
    }
}
