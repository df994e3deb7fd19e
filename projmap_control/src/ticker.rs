// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable periodic animation clock.
//!
//! [`AnimationTicker`] is host-agnostic: it never reads a clock itself. The
//! host passes monotonic millisecond timestamps into [`AnimationTicker::start`]
//! and [`AnimationTicker::poll`], typically from its frame callback.
//!
//! ```
//! use projmap_control::ticker::AnimationTicker;
//!
//! let mut ticker = AnimationTicker::new(16, 100);
//! ticker.start(1_000);
//! assert_eq!(ticker.poll(1_010), 0);
//! assert_eq!(ticker.poll(1_032), 2);
//! assert_eq!(ticker.phase(), 2);
//!
//! ticker.stop();
//! assert_eq!(ticker.poll(5_000), 0);
//! ```

/// Default tick interval, roughly one display frame at 60 Hz.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Default number of ticks after which the phase wraps back to zero.
pub const DEFAULT_PATTERN_PERIOD: u32 = 100;

/// Model units the stripe pattern scrolls per phase step.
pub const PATTERN_STEP: f64 = 2.0;

/// A periodic phase counter that only advances while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTicker {
    interval_ms: u64,
    period: u32,
    phase: u32,
    next_due: Option<u64>,
}

impl Default for AnimationTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS, DEFAULT_PATTERN_PERIOD)
    }
}

impl AnimationTicker {
    /// Creates a stopped ticker.
    ///
    /// Zero values are raised to one so the ticker always makes progress.
    #[must_use]
    pub fn new(interval_ms: u64, period: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            period: period.max(1),
            phase: 0,
            next_due: None,
        }
    }

    /// Starts ticking from `now_ms`, with the phase reset to zero.
    ///
    /// Does nothing if already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.is_running() {
            return;
        }
        self.phase = 0;
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Stops ticking. No further ticks are issued until the next start.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Returns `true` while the ticker is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Advances to `now_ms`, returning how many ticks elapsed.
    ///
    /// Timestamps earlier than the next due tick, and any call while stopped,
    /// return zero.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }
        let elapsed = (now_ms - due) / self.interval_ms + 1;
        let period = u64::from(self.period);
        let phase = (u64::from(self.phase) + elapsed % period) % period;
        self.phase = u32::try_from(phase).unwrap_or_default();
        self.next_due = Some(due.saturating_add(elapsed.saturating_mul(self.interval_ms)));
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    /// Current phase, in `0..period`.
    #[must_use]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Number of ticks per phase cycle.
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Milliseconds between ticks.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Scroll offset of the content pattern for the current phase.
    #[must_use]
    pub fn pattern_offset(&self) -> f64 {
        f64::from(self.phase) * PATTERN_STEP
    }
}
