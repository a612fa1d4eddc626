//! Per-identity sliding-window admission.
//!
//! A single [`RateGovernor`] is shared by every request handler. Pruning, the ceiling check,
//! and recording the new timestamp happen under one lock, so concurrent callers presenting the
//! same identity can never be admitted past the ceiling.

use crate::config::RateLimitConfig;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::warn;

/// Monotonic time source, measured from an arbitrary fixed origin.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced by hand, for tests and replay.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

pub struct RateGovernor<C = MonotonicClock> {
    config: RateLimitConfig,
    clock: C,
    windows: Mutex<HashMap<String, VecDeque<Duration>>>,
}

impl RateGovernor<MonotonicClock> {
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, MonotonicClock::default())
    }
}

impl Default for RateGovernor<MonotonicClock> {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl<C: Clock> RateGovernor<C> {
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Admit and record a request for `identity`, or reject it without recording.
    pub fn admit(&self, identity: &str) -> bool {
        let now = self.clock.now();
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        let timestamps = windows.entry(identity.to_string()).or_default();

        if let Some(cutoff) = now.checked_sub(self.config.window) {
            while timestamps.front().is_some_and(|&seen| seen <= cutoff) {
                timestamps.pop_front();
            }
        }

        if timestamps.len() >= self.config.max_requests {
            warn!(
                limit = self.config.max_requests,
                window_ms = self.config.window.as_millis() as u64,
                "rate limit exceeded"
            );
            return false;
        }

        timestamps.push_back(now);
        true
    }

    /// Requests still counted against `identity` at the current instant.
    pub fn in_window(&self, identity: &str) -> usize {
        let now = self.clock.now();
        let windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        windows.get(identity).map_or(0, |timestamps| {
            let cutoff = now.checked_sub(self.config.window);
            timestamps
                .iter()
                .filter(|&&seen| cutoff.is_none_or(|cutoff| seen > cutoff))
                .count()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn governor() -> (RateGovernor<Arc<ManualClock>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let governor = RateGovernor::with_clock(RateLimitConfig::default(), clock.clone());
        (governor, clock)
    }

    #[test]
    fn admits_up_to_ceiling_then_rejects() {
        let (governor, _clock) = governor();
        for _ in 0..5 {
            assert!(governor.admit("k1"));
        }
        assert!(!governor.admit("k1"));
        assert_eq!(governor.in_window("k1"), 5);
    }

    #[test]
    fn rejection_is_not_recorded() {
        let (governor, clock) = governor();
        for _ in 0..5 {
            assert!(governor.admit("k1"));
        }
        clock.advance(Duration::from_millis(500));
        assert!(!governor.admit("k1"));
        assert_eq!(governor.in_window("k1"), 5);
        clock.advance(Duration::from_millis(501));
        assert!(governor.admit("k1"));
    }

    #[test]
    fn entry_exactly_one_window_old_is_pruned() {
        let (governor, clock) = governor();
        for _ in 0..5 {
            assert!(governor.admit("k1"));
        }
        clock.advance(Duration::from_secs(1));
        assert!(governor.admit("k1"));
        assert_eq!(governor.in_window("k1"), 1);
    }

    #[test]
    fn identities_are_independent() {
        let (governor, _clock) = governor();
        for _ in 0..5 {
            assert!(governor.admit("k1"));
        }
        assert!(!governor.admit("k1"));
        assert!(governor.admit("k2"));
        assert_eq!(governor.in_window("unknown"), 0);
    }
}
