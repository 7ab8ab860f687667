//! Scripted gesture driver over a virtual clock.
//!
//! Robot-style harness: it owns a normalizer plus recognizer wired to a
//! [`RecordingSink`] and replays input steps under a millisecond clock the
//! test controls. Steps deliver events without pumping, so a test can
//! script same-turn races (a scroll landing next to a pending zero-delay
//! decision) exactly; [`GestureScript::advance`] then pumps at every
//! intermediate deadline, which is how a real host's wakeup loop behaves.

use tactus_core::{GestureConfig, GestureKind, GestureRecognizer, TargetId, TimestampMs};
use tactus_input::{InputNormalizer, MouseButton, TouchId};

use crate::recorder::{RecordedGesture, RecordingSink};

pub struct GestureScript {
    input: InputNormalizer<RecordingSink>,
    sink: RecordingSink,
    now: TimestampMs,
}

impl Default for GestureScript {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureScript {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        let sink = RecordingSink::new();
        let recognizer = GestureRecognizer::with_config(config, sink.clone());
        Self {
            input: InputNormalizer::new(recognizer),
            sink,
            now: 0,
        }
    }

    pub fn now(&self) -> TimestampMs {
        self.now
    }

    pub fn sink(&self) -> &RecordingSink {
        &self.sink
    }

    pub fn kinds(&self) -> Vec<GestureKind> {
        self.sink.kinds()
    }

    pub fn take(&self) -> Vec<RecordedGesture> {
        self.sink.take()
    }

    // Raw steps. None of these pump; call `pump` or `advance`.

    pub fn touch_down(&mut self, id: TouchId, target: TargetId, x: f32, y: f32) {
        self.input.touch_down(id, target, x, y, self.now);
    }

    pub fn touch_move(&mut self, id: TouchId, x: f32, y: f32) {
        self.input.touch_move(id, x, y);
    }

    pub fn touch_up(&mut self, id: TouchId) {
        self.input.touch_up(id, self.now);
    }

    pub fn touch_cancel(&mut self, id: TouchId) {
        self.input.touch_cancel(id);
    }

    pub fn mouse_down(&mut self, button: MouseButton, target: TargetId, x: f32, y: f32) {
        self.input.mouse_down(button, target, x, y, self.now);
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.input.mouse_move(x, y);
    }

    pub fn mouse_up(&mut self, button: MouseButton) {
        self.input.mouse_up(button, self.now);
    }

    pub fn scroll(&mut self) {
        self.input.scroll();
    }

    pub fn interrupt(&mut self) {
        self.input.interrupt();
    }

    /// Runs everything due at the current time.
    pub fn pump(&mut self) {
        self.input.pump(self.now);
    }

    /// Advances the clock by `ms`, pumping at every deadline on the way,
    /// the way a host wakeup loop would.
    pub fn advance(&mut self, ms: u64) {
        let end = self.now + ms;
        while let Some(deadline) = self.input.next_deadline() {
            if deadline > end {
                break;
            }
            self.now = self.now.max(deadline);
            self.input.pump(self.now);
        }
        self.now = end;
        self.input.pump(self.now);
    }

    /// Advances far enough for every pending resolution to settle.
    pub fn settle(&mut self) {
        let config = *self.input.recognizer().config();
        self.advance(config.long_tap_delay_ms + config.double_tap_window_ms + 1);
    }

    // Composite gestures.

    pub fn tap_at(&mut self, target: TargetId, x: f32, y: f32) {
        self.touch_down(1, target, x, y);
        self.advance(40);
        self.touch_up(1);
        self.pump();
    }

    pub fn double_tap_at(&mut self, target: TargetId, x: f32, y: f32) {
        self.tap_at(target, x, y);
        self.advance(100);
        self.tap_at(target, x, y);
    }

    pub fn swipe(&mut self, target: TargetId, from: (f32, f32), to: (f32, f32)) {
        self.touch_down(1, target, from.0, from.1);
        self.advance(20);
        self.touch_move(1, (from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        self.advance(20);
        self.touch_move(1, to.0, to.1);
        self.advance(20);
        self.touch_up(1);
        self.pump();
    }

    pub fn long_press(&mut self, target: TargetId, x: f32, y: f32) {
        self.touch_down(1, target, x, y);
        let delay = self.input.recognizer().config().long_tap_delay_ms;
        self.advance(delay);
        self.touch_up(1);
        self.pump();
    }
}
