//! Request timestamps for Spikex API authentication.
//!
//! Every signed request carries `xt-validate-timestamp` in epoch milliseconds.
//! The server rejects requests whose timestamp falls outside the receive window,
//! so the default clock backdates by a small skew to tolerate a fast local clock.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default amount the local clock is backdated by.
pub const DEFAULT_CLOCK_SKEW: Duration = Duration::from_secs(30);

/// Trait for providing request timestamps.
pub trait TimestampProvider: Send + Sync {
    /// Timestamp to sign the next request with, in epoch milliseconds.
    fn timestamp_millis(&self) -> u64;
}

/// Wall-clock timestamps, shifted back by a fixed skew.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    skew: Duration,
}

impl SystemClock {
    /// Create a clock with the default 30 second skew.
    pub fn new() -> Self {
        Self::with_skew(DEFAULT_CLOCK_SKEW)
    }

    /// Create a clock backdated by `skew`.
    pub fn with_skew(skew: Duration) -> Self {
        Self { skew }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampProvider for SystemClock {
    fn timestamp_millis(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        now.saturating_sub(self.skew).as_millis() as u64
    }
}

/// A constant timestamp. Useful for reproducing signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp_millis(&self) -> u64 {
        self.0
    }
}
