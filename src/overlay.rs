//! Countdown and dismissal state of the break overlay.
//!
//! The overlay starts `Running` with [`BREAK_SECONDS`] on the clock. Every
//! tick takes one second off; the tick that reaches zero closes the overlay
//! before it returns. The user may close it at any time. Closing happens once.

use std::fmt;

/// Length of a break in seconds.
pub const BREAK_SECONDS: u8 = 20;

/// Seconds left before the overlay dismisses itself. Always within
/// `0..=BREAK_SECONDS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Countdown(u8);

impl Countdown {
    pub fn new() -> Self {
        Self(BREAK_SECONDS)
    }

    pub fn seconds(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One second less, saturating at zero.
    pub fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Running,
    /// Terminal.
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The countdown reached zero.
    Elapsed,
    /// The user ended the break early.
    Dismissed,
}

/// Answer of a tick to the periodic timer driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Performs the actual close, e.g. asking the toolkit to shut the window.
pub trait CloseHandler {
    fn close(&mut self, reason: CloseReason);
}

#[derive(Debug)]
pub struct BreakOverlay {
    countdown: Countdown,
    state: OverlayState,
    close_reason: Option<CloseReason>,
}

impl BreakOverlay {
    pub fn open() -> Self {
        let overlay = Self {
            countdown: Countdown::new(),
            state: OverlayState::Running,
            close_reason: None,
        };
        tracing::info!(seconds = overlay.countdown.seconds(), "break overlay opened");
        overlay
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_closing(&self) -> bool {
        self.state == OverlayState::Closing
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero closes the overlay through `handler` before returning
    /// [`TickOutcome::Stop`]. Ticks after closing change nothing.
    pub fn tick(&mut self, handler: &mut impl CloseHandler) -> TickOutcome {
        if self.is_closing() {
            return TickOutcome::Stop;
        }
        self.countdown = self.countdown.decremented();
        tracing::debug!(remaining = self.countdown.seconds(), "tick");
        if self.countdown.is_zero() {
            self.finish(CloseReason::Elapsed, handler);
            return TickOutcome::Stop;
        }
        TickOutcome::Continue
    }

    /// Close the overlay on behalf of the user.
    ///
    /// Returns `false` when the overlay was already closing, in which case
    /// `handler` is not called again.
    pub fn close(&mut self, handler: &mut impl CloseHandler) -> bool {
        self.finish(CloseReason::Dismissed, handler)
    }

    fn finish(&mut self, reason: CloseReason, handler: &mut impl CloseHandler) -> bool {
        if self.is_closing() {
            tracing::debug!(?reason, "overlay already closing");
            return false;
        }
        self.state = OverlayState::Closing;
        self.close_reason = Some(reason);
        tracing::info!(?reason, remaining = self.countdown.seconds(), "closing break overlay");
        handler.close(reason);
        true
    }
}
