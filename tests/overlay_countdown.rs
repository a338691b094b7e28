use break_overlay::overlay::{
    BreakOverlay, CloseHandler, CloseReason, OverlayState, TickOutcome, BREAK_SECONDS,
};

#[derive(Default)]
struct CloseRecorder {
    calls: Vec<CloseReason>,
}

impl CloseHandler for CloseRecorder {
    fn close(&mut self, reason: CloseReason) {
        self.calls.push(reason);
    }
}

#[test]
fn opens_running_with_twenty_seconds() {
    let overlay = BreakOverlay::open();
    assert_eq!(overlay.countdown().seconds(), 20);
    assert_eq!(overlay.countdown().seconds(), BREAK_SECONDS);
    assert_eq!(overlay.state(), OverlayState::Running);
    assert_eq!(overlay.close_reason(), None);
}

#[test]
fn each_tick_takes_one_second() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    for expected in (1..BREAK_SECONDS).rev() {
        assert_eq!(overlay.tick(&mut rec), TickOutcome::Continue);
        assert_eq!(overlay.countdown().seconds(), expected);
    }
    assert!(rec.calls.is_empty());
}

#[test]
fn twenty_ticks_close_exactly_once() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    let mut outcomes = Vec::new();
    for _ in 0..20 {
        outcomes.push(overlay.tick(&mut rec));
    }
    assert_eq!(outcomes.last(), Some(&TickOutcome::Stop));
    assert!(outcomes[..19].iter().all(|o| *o == TickOutcome::Continue));
    assert_eq!(overlay.countdown().seconds(), 0);
    assert_eq!(overlay.state(), OverlayState::Closing);
    assert_eq!(rec.calls, vec![CloseReason::Elapsed]);
}

#[test]
fn close_fires_within_the_tick_reaching_zero() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    for _ in 0..19 {
        overlay.tick(&mut rec);
    }
    assert!(rec.calls.is_empty());
    overlay.tick(&mut rec);
    assert_eq!(rec.calls.len(), 1);
}

#[test]
fn ticks_after_closing_are_ignored() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    for _ in 0..25 {
        overlay.tick(&mut rec);
    }
    assert_eq!(overlay.countdown().seconds(), 0);
    assert_eq!(rec.calls.len(), 1);
    assert_eq!(overlay.tick(&mut rec), TickOutcome::Stop);
}

#[test]
fn dismiss_at_thirteen_closes_immediately() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    for _ in 0..7 {
        overlay.tick(&mut rec);
    }
    assert_eq!(overlay.countdown().seconds(), 13);

    assert!(overlay.close(&mut rec));
    assert_eq!(overlay.state(), OverlayState::Closing);
    assert_eq!(overlay.close_reason(), Some(CloseReason::Dismissed));
    assert_eq!(rec.calls, vec![CloseReason::Dismissed]);

    assert_eq!(overlay.tick(&mut rec), TickOutcome::Stop);
    assert_eq!(overlay.countdown().seconds(), 13);
    assert_eq!(rec.calls.len(), 1);
}

#[test]
fn closing_twice_has_no_extra_effect() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    assert!(overlay.close(&mut rec));
    assert!(!overlay.close(&mut rec));
    assert_eq!(rec.calls.len(), 1);
}

#[test]
fn dismiss_after_elapsed_keeps_elapsed_reason() {
    let mut overlay = BreakOverlay::open();
    let mut rec = CloseRecorder::default();
    for _ in 0..20 {
        overlay.tick(&mut rec);
    }
    assert!(!overlay.close(&mut rec));
    assert_eq!(overlay.close_reason(), Some(CloseReason::Elapsed));
    assert_eq!(rec.calls, vec![CloseReason::Elapsed]);
}
