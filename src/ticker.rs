use std::time::{Duration, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic timer layered on top of the GUI frame loop.
///
/// The frame callback asks how many ticks are due; deadlines advance by whole
/// periods so a late frame still delivers every missed tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Arm a ticker whose first tick is due one period after `now`.
    /// Periods shorter than a millisecond are rounded up.
    pub fn armed(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next: Some(now + period),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Number of ticks that became due since the last call.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };
        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.period;
        }
        self.next = Some(next);
        count
    }

    /// Time left until the next tick, `None` when disarmed.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }
}
