//! The session controller: consumes normalized contact events, drives the
//! timer queue, and emits gesture outcomes.
//!
//! One recognizer tracks one input surface. All state lives on the
//! instance; nothing is ambient, so independent surfaces get independent
//! recognizers without cross-talk.
//!
//! # Host contract
//!
//! The host delivers events in arrival order and then calls
//! [`GestureRecognizer::pump`] with the current time, typically once per
//! input batch and once per wakeup at [`GestureRecognizer::next_deadline`].
//! The tap and swipe decisions are armed with a zero delay on purpose:
//! they only run at the next pump, so an abort queued in the same turn
//! (for example a scroll recognized elsewhere) still suppresses them.
//! Whoever is processed first by the single-threaded queue wins; there is
//! no other race.

use crate::classifier;
use crate::config::GestureConfig;
use crate::session::ContactSession;
use crate::sink::{Gesture, GestureSink, TapControl};
use crate::timers::{TimerKind, TimerQueue};
use crate::types::{ContactEvent, TargetId, TimestampMs};

pub struct GestureRecognizer<S: GestureSink> {
    config: GestureConfig,
    session: ContactSession,
    timers: TimerQueue,
    /// Control of the last dispatched tap while its double/single-tap
    /// resolution is still pending.
    tap_control: Option<TapControl>,
    /// Sums of per-move displacement from the start position. Reset at
    /// contact-end and on total cancellation only, never at contact-start:
    /// movement accrued by an earlier contact of the same session (e.g.
    /// the first half of a double-tap) keeps counting against the bounds.
    cumulative_dx: f32,
    cumulative_dy: f32,
    sink: S,
}

impl<S: GestureSink> GestureRecognizer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(GestureConfig::default(), sink)
    }

    pub fn with_config(config: GestureConfig, sink: S) -> Self {
        Self {
            config,
            session: ContactSession::default(),
            timers: TimerQueue::new(),
            tap_control: None,
            cumulative_dx: 0.0,
            cumulative_dy: 0.0,
            sink,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Routes one normalized event to the matching transition.
    pub fn handle(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::Start {
                target,
                x,
                y,
                timestamp,
            } => self.contact_start(target, x, y, timestamp),
            ContactEvent::Move { x, y } => self.contact_move(x, y),
            ContactEvent::End { timestamp } => self.contact_end(timestamp),
            ContactEvent::Cancel => self.contact_cancel(),
        }
    }

    /// A primary contact went down on `target`.
    ///
    /// Re-entrant starts are tolerated: a stray start while a session is
    /// already tracked re-initializes the coordinates in place.
    pub fn contact_start(&mut self, target: TargetId, x: f32, y: f32, now: TimestampMs) {
        // Movement data sticking around from a contact whose cancel never
        // arrived must not leak into the new contact's swipe test.
        if self.session.last.is_some() {
            self.session.last = None;
        }

        let gap = now.saturating_sub(self.session.started_at.unwrap_or(now));

        // A fresh start supersedes whatever decision chain the previous
        // cycle left pending.
        self.timers.cancel(TimerKind::SingleTap);
        self.timers.cancel(TimerKind::Tap);
        self.timers.cancel(TimerKind::Swipe);

        self.session.target = Some(target);
        self.session.start_x = x;
        self.session.start_y = y;
        self.session.double_tap_candidate =
            classifier::is_double_tap_gap(gap, self.config.double_tap_window_ms);
        self.session.started_at = Some(now);

        self.timers
            .schedule(TimerKind::LongTap, now + self.config.long_tap_delay_ms);

        log::trace!(
            "contact start on {} at ({x}, {y}), gap {gap}ms, double-tap candidate: {}",
            target,
            self.session.double_tap_candidate
        );
    }

    /// The primary contact moved. Ignored when no session is active.
    pub fn contact_move(&mut self, x: f32, y: f32) {
        if !self.session.live() {
            return;
        }

        let move_x = (self.session.start_x - x).abs();
        let move_y = (self.session.start_y - y).abs();
        self.session.last = Some((x, y));
        self.cumulative_dx += move_x;
        self.cumulative_dy += move_y;

        if move_x > self.config.move_disqualify_threshold
            || move_y > self.config.move_disqualify_threshold
        {
            self.timers.cancel(TimerKind::LongTap);
        }
    }

    /// The primary contact lifted. Arms the zero-delay swipe or tap
    /// decision, or clears the session silently when the contact moved too
    /// far for a tap without qualifying as a swipe.
    pub fn contact_end(&mut self, now: TimestampMs) {
        self.timers.cancel(TimerKind::LongTap);

        let swiped = self.session.last.is_some_and(|(last_x, last_y)| {
            classifier::is_swipe(
                self.session.start_x,
                self.session.start_y,
                last_x,
                last_y,
                self.config.swipe_threshold,
            )
        });

        if swiped {
            self.timers
                .schedule(TimerKind::Swipe, now + self.config.tap_decision_delay_ms);
        } else if self.session.live() {
            if classifier::within_tap_bounds(
                self.cumulative_dx,
                self.cumulative_dy,
                self.config.swipe_threshold,
            ) {
                self.timers
                    .schedule(TimerKind::Tap, now + self.config.tap_decision_delay_ms);
            } else {
                // Moved too far for a tap, not far enough for a swipe.
                log::trace!("contact end disqualified, no gesture");
                self.clear_session();
            }
        }

        self.cumulative_dx = 0.0;
        self.cumulative_dy = 0.0;
    }

    /// The contact was cancelled by the platform. Total cancellation.
    pub fn contact_cancel(&mut self) {
        self.cancel_all();
    }

    /// External abort signal (e.g. a scroll recognized elsewhere took the
    /// contact). Total cancellation.
    pub fn abort(&mut self) {
        self.cancel_all();
    }

    /// Cancels every timer and clears the session. Idempotent; safe to
    /// call with nothing pending.
    pub fn cancel_all(&mut self) {
        self.timers.cancel_all();
        self.clear_session();
        self.cumulative_dx = 0.0;
        self.cumulative_dy = 0.0;
    }

    /// Runs every deferred decision due at `now`, in deadline then arrival
    /// order.
    pub fn pump(&mut self, now: TimestampMs) {
        if self
            .tap_control
            .as_ref()
            .is_some_and(TapControl::is_cancelled)
        {
            self.cancel_all();
        }
        while let Some(kind) = self.timers.pop_due(now) {
            self.fire(kind, now);
        }
    }

    /// Earliest pending deadline, for hosts that sleep between pumps.
    pub fn next_deadline(&self) -> Option<TimestampMs> {
        self.timers.next_deadline()
    }

    fn fire(&mut self, kind: TimerKind, now: TimestampMs) {
        match kind {
            TimerKind::LongTap => {
                // Races contact-end: only fires while the contact is still
                // tracked.
                if self.session.live() {
                    if let Some(target) = self.session.target {
                        self.emit(target, Gesture::LongTap);
                    }
                    self.clear_session();
                }
            }
            TimerKind::Swipe => {
                let (Some(target), Some((last_x, last_y))) =
                    (self.session.target, self.session.last)
                else {
                    return;
                };
                self.emit(target, Gesture::Swipe);
                let direction = classifier::swipe_direction(
                    self.session.start_x,
                    last_x,
                    self.session.start_y,
                    last_y,
                );
                self.emit(target, Gesture::from(direction));
                self.clear_session();
            }
            TimerKind::Tap => {
                let Some(target) = self.session.target else {
                    return;
                };
                let control = TapControl::new();
                self.tap_control = Some(control.clone());
                self.emit(target, Gesture::Tap(control.clone()));
                if control.is_cancelled() {
                    self.cancel_all();
                } else if self.session.double_tap_candidate {
                    self.emit(target, Gesture::DoubleTap);
                    self.clear_session();
                } else {
                    self.timers.schedule(
                        TimerKind::SingleTap,
                        now + self.config.double_tap_window_ms,
                    );
                }
            }
            TimerKind::SingleTap => {
                if let Some(target) = self.session.target {
                    self.emit(target, Gesture::SingleTap);
                }
                self.clear_session();
            }
        }
    }

    fn clear_session(&mut self) {
        self.session.clear();
        self.tap_control = None;
    }

    fn emit(&mut self, target: TargetId, gesture: Gesture) {
        log::debug!("dispatch {:?} to {}", gesture.kind(), target);
        self.sink.dispatch(target, gesture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::GestureKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Recorded = Rc<RefCell<Vec<(TargetId, GestureKind)>>>;

    fn recognizer() -> (GestureRecognizer<impl GestureSink>, Recorded) {
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let sink_recorded = recorded.clone();
        let recognizer = GestureRecognizer::new(move |target, gesture: Gesture| {
            sink_recorded.borrow_mut().push((target, gesture.kind()));
        });
        (recognizer, recorded)
    }

    fn kinds(recorded: &Recorded) -> Vec<GestureKind> {
        recorded.borrow().iter().map(|(_, kind)| kind).copied().collect()
    }

    #[test]
    fn move_without_session_is_ignored() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_move(10.0, 10.0);
        recognizer.contact_end(100);
        recognizer.pump(1000);
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn tap_then_single_tap() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(7, 50.0, 50.0, 1_000);
        recognizer.contact_end(1_080);
        recognizer.pump(1_080);
        assert_eq!(kinds(&recorded), [GestureKind::Tap]);
        recognizer.pump(1_330);
        assert_eq!(kinds(&recorded), [GestureKind::Tap, GestureKind::SingleTap]);
        assert_eq!(recorded.borrow()[0].0, 7);
    }

    #[test]
    fn single_tap_waits_out_the_window() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(1, 0.0, 0.0, 0);
        recognizer.contact_end(50);
        recognizer.pump(50);
        recognizer.pump(299);
        assert_eq!(kinds(&recorded), [GestureKind::Tap]);
        recognizer.pump(300);
        assert_eq!(kinds(&recorded), [GestureKind::Tap, GestureKind::SingleTap]);
    }

    #[test]
    fn double_tap_on_second_cycle() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(3, 10.0, 10.0, 0);
        recognizer.contact_end(60);
        recognizer.pump(60);
        recognizer.contact_start(3, 11.0, 11.0, 200);
        recognizer.contact_end(260);
        recognizer.pump(260);
        assert_eq!(
            kinds(&recorded),
            [GestureKind::Tap, GestureKind::Tap, GestureKind::DoubleTap]
        );
        // The single-tap of the first cycle must never surface.
        recognizer.pump(2_000);
        assert_eq!(recorded.borrow().len(), 3);
    }

    #[test]
    fn swipe_left_from_decreasing_x() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(9, 100.0, 100.0, 0);
        recognizer.contact_move(50.0, 100.0);
        recognizer.contact_end(120);
        recognizer.pump(120);
        assert_eq!(kinds(&recorded), [GestureKind::Swipe, GestureKind::SwipeLeft]);
    }

    #[test]
    fn long_tap_fires_while_held() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.pump(749);
        assert!(recorded.borrow().is_empty());
        recognizer.pump(750);
        assert_eq!(kinds(&recorded), [GestureKind::LongTap]);
        // The lift after a long-tap is silent.
        recognizer.contact_end(800);
        recognizer.pump(2_000);
        assert_eq!(recorded.borrow().len(), 1);
    }

    #[test]
    fn movement_disqualifies_long_tap() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(5.0, 0.0);
        recognizer.pump(1_000);
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn sub_threshold_moves_keep_long_tap_alive() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(2.0, 0.0);
        recognizer.contact_move(2.0, 2.0);
        recognizer.contact_move(0.0, 2.0);
        recognizer.pump(750);
        assert_eq!(kinds(&recorded), [GestureKind::LongTap]);
    }

    #[test]
    fn out_and_back_is_disqualified_silently() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(31.0, 0.0);
        recognizer.contact_move(0.0, 0.0);
        // Net displacement is zero, cumulative movement is not: no tap,
        // and no swipe either.
        recognizer.contact_end(100);
        recognizer.pump(1_000);
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn abort_in_same_turn_suppresses_pending_tap() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_end(50);
        recognizer.abort();
        recognizer.pump(50);
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn abort_in_same_turn_suppresses_pending_swipe() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(80.0, 0.0);
        recognizer.contact_end(50);
        recognizer.abort();
        recognizer.pump(50);
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn cancel_all_is_idempotent() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.cancel_all();
        recognizer.cancel_all();
        recognizer.pump(10_000);
        assert!(recorded.borrow().is_empty());
        // And safe with nothing ever pending.
        let (mut idle, _) = self::recognizer();
        idle.cancel_all();
    }

    #[test]
    fn stale_last_position_cleared_on_fresh_start() {
        let (mut recognizer, recorded) = recognizer();
        // A contact whose end/cancel never arrived leaves movement behind.
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(200.0, 0.0);
        // Fresh start, quick lift: the stale coordinates must not be read
        // as a swipe. (The leftover cumulative movement still disqualifies
        // the tap, so this cycle stays silent.)
        recognizer.contact_start(4, 0.0, 0.0, 5_000);
        recognizer.contact_end(5_050);
        recognizer.pump(5_050);
        assert!(recorded.borrow().is_empty());
        // The disqualifying end reset the cumulative sums: the next cycle
        // taps normally.
        recognizer.contact_start(4, 0.0, 0.0, 6_000);
        recognizer.contact_end(6_050);
        recognizer.pump(6_050);
        assert_eq!(kinds(&recorded), [GestureKind::Tap]);
    }

    #[test]
    fn cancel_touch_suppresses_single_tap() {
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let sink_recorded = recorded.clone();
        let mut recognizer = GestureRecognizer::new(move |target, gesture: Gesture| {
            if let Gesture::Tap(control) = &gesture {
                control.cancel_touch();
            }
            sink_recorded.borrow_mut().push((target, gesture.kind()));
        });
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_end(50);
        recognizer.pump(50);
        recognizer.pump(10_000);
        assert_eq!(kinds(&recorded), [GestureKind::Tap]);
    }

    #[test]
    fn cancel_touch_suppresses_double_tap() {
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let sink_recorded = recorded.clone();
        let mut recognizer = GestureRecognizer::new(move |target, gesture: Gesture| {
            if let Gesture::Tap(control) = &gesture {
                control.cancel_touch();
            }
            sink_recorded.borrow_mut().push((target, gesture.kind()));
        });
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_end(50);
        recognizer.pump(50);
        recognizer.contact_start(4, 0.0, 0.0, 150);
        recognizer.contact_end(200);
        recognizer.pump(200);
        // Each cycle taps, but cancellation prevents the double-tap link.
        assert_eq!(kinds(&recorded), [GestureKind::Tap, GestureKind::Tap]);
        recognizer.pump(10_000);
        assert_eq!(recorded.borrow().len(), 2);
    }

    #[test]
    fn late_cancel_touch_resolves_at_next_pump() {
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let control: Rc<RefCell<Option<TapControl>>> = Rc::new(RefCell::new(None));
        let sink_control = control.clone();
        let sink_recorded = recorded.clone();
        let mut recognizer = GestureRecognizer::new(move |target, gesture: Gesture| {
            if let Gesture::Tap(tap) = &gesture {
                *sink_control.borrow_mut() = Some(tap.clone());
            }
            sink_recorded.borrow_mut().push((target, gesture.kind()));
        });
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_end(50);
        recognizer.pump(50);
        // The listener stashed the control and cancels from a later turn.
        control.borrow().as_ref().unwrap().cancel_touch();
        recognizer.pump(10_000);
        assert_eq!(kinds(&recorded), [GestureKind::Tap]);
    }

    #[test]
    fn swipe_after_cancelled_long_tap() {
        let (mut recognizer, recorded) = recognizer();
        recognizer.contact_start(4, 0.0, 0.0, 0);
        recognizer.contact_move(10.0, 0.0);
        // Long past the long-tap delay: the timer was cancelled by the
        // movement, so nothing fires.
        recognizer.pump(900);
        assert!(recorded.borrow().is_empty());
        recognizer.contact_move(40.0, 0.0);
        recognizer.contact_end(950);
        recognizer.pump(950);
        assert_eq!(kinds(&recorded), [GestureKind::Swipe, GestureKind::SwipeRight]);
    }
}
