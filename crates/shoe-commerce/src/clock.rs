//! Time source and recency window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used for tests and for rendering a
/// batch of cards against a single reference time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Default window: a listing released within the last 30 days is new.
pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// How recently a listing must have been released to count as new.
///
/// The window is exclusive: a listing whose age equals the window
/// exactly is no longer new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    /// Window spanning the given number of days.
    pub fn from_days(days: u32) -> Self {
        Self { days }
    }

    /// Window length in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Window length as a duration.
    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }

    /// Whether `released` falls inside the window ending at `now`.
    ///
    /// Release dates in the future have a negative age and are inside.
    pub fn contains(&self, released: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(released) < self.duration()
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::from_days(DEFAULT_RECENCY_DAYS)
    }
}

impl From<u32> for RecencyWindow {
    fn from(days: u32) -> Self {
        Self::from_days(days)
    }
}

impl From<RecencyWindow> for u32 {
    fn from(window: RecencyWindow) -> Self {
        window.days
    }
}
