//! One-second countdown shared by both rounds.
//!
//! The host owns the real timer. Each time a countdown starts it hands out a
//! fresh [`TimerToken`], and the host passes that token back with every tick.
//! Ticks carrying any other token are ignored, so a tick scheduled before a
//! cancel or reset can never reach the new countdown.

use portable_atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one live run of a [`Countdown`].
///
/// Tokens are unique across every countdown in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The token was not the live one; nothing changed.
    Stale,
    /// One second elapsed and time remains.
    Running {
        /// Seconds left after this tick.
        remaining: u32,
    },
    /// The clock reached zero on this tick. The countdown is no longer live.
    Expired,
}

/// A seconds countdown that is either stopped or running under one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    live: Option<TimerToken>,
}

impl Countdown {
    /// Creates a stopped countdown holding `seconds`.
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            live: None,
        }
    }

    /// Seconds left on the clock.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The token of the running countdown, if any.
    #[must_use]
    pub const fn token(&self) -> Option<TimerToken> {
        self.live
    }

    /// Returns `true` while a token is live.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.live.is_some()
    }

    /// Starts (or restarts) the countdown from its current value.
    ///
    /// Any previously issued token becomes stale.
    pub fn start(&mut self) -> TimerToken {
        let token = TimerToken::next();
        self.live = Some(token);
        token
    }

    /// Stops the countdown. The remaining time is kept.
    pub fn cancel(&mut self) {
        self.live = None;
    }

    /// Stops the countdown and restores it to `seconds`.
    pub fn reset(&mut self, seconds: u32) {
        self.cancel();
        self.remaining = seconds;
    }

    /// Delivers one tick.
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if self.live != Some(token) {
            return TickOutcome::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.live = None;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Removes `seconds` from the clock, flooring at zero, and returns what is left.
    ///
    /// The countdown keeps running even if this drains it; the caller decides
    /// what an empty clock means.
    pub fn penalize(&mut self, seconds: u32) -> u32 {
        self.remaining = self.remaining.saturating_sub(seconds);
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_count_down_to_expiry() {
        let mut countdown = Countdown::new(3);
        let token = countdown.start();
        assert_eq!(countdown.tick(token), TickOutcome::Running { remaining: 2 });
        assert_eq!(countdown.tick(token), TickOutcome::Running { remaining: 1 });
        assert_eq!(countdown.tick(token), TickOutcome::Expired);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(token), TickOutcome::Stale);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_stopped_countdown_ignores_ticks() {
        let mut countdown = Countdown::new(10);
        let token = countdown.start();
        countdown.cancel();
        assert!(countdown.tick(token).is_stale());
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_restart_invalidates_previous_token() {
        let mut countdown = Countdown::new(10);
        let old = countdown.start();
        let new = countdown.start();
        assert_ne!(old, new);
        assert!(countdown.tick(old).is_stale());
        assert_eq!(countdown.tick(new), TickOutcome::Running { remaining: 9 });
    }

    #[test]
    fn test_tokens_are_unique_across_countdowns() {
        let mut a = Countdown::new(5);
        let mut b = Countdown::new(5);
        let ta = a.start();
        let tb = b.start();
        assert_ne!(ta, tb);
        assert!(b.tick(ta).is_stale());
    }

    #[test]
    fn test_reset_restores_duration_and_stops() {
        let mut countdown = Countdown::new(5);
        let token = countdown.start();
        countdown.tick(token);
        countdown.reset(90);
        assert_eq!(countdown.remaining(), 90);
        assert!(countdown.token().is_none());
    }

    #[test]
    fn test_penalize_floors_at_zero() {
        let mut countdown = Countdown::new(7);
        assert_eq!(countdown.penalize(5), 2);
        assert_eq!(countdown.penalize(5), 0);
    }
}
