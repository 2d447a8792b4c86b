//! Wrapping millisecond timestamps
//!
//! Hardware tick counters are free-running and wrap at their word size.
//! Elapsed time is always computed with wrapping subtraction, so every
//! comparison here stays correct across the wrap as long as the compared
//! points are less than half the counter range apart.

use embassy_time::{Duration, Instant};

use crate::Clock;

/// Point in time on a 32-bit millisecond counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Timestamp(u32);

impl Timestamp {
    /// Counter origin
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from a raw millisecond counter value
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Raw millisecond counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Signed distance from `other` to `self`.
    ///
    /// Negative when `self` lies before `other`.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn signed_since(self, other: Self) -> i32 {
        self.0.wrapping_sub(other.0) as i32
    }

    /// Check if `self` is the same instant as `other` or lies after it
    pub const fn is_at_or_after(self, other: Self) -> bool {
        self.signed_since(other) >= 0
    }

    /// Timestamp `millis` milliseconds later
    pub const fn offset_by(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }

    /// Timestamp `duration` later
    pub const fn after(self, duration: Duration) -> Self {
        self.offset_by(span_millis(duration))
    }

    /// Elapsed time since `earlier` as a [`Duration`]
    #[allow(clippy::cast_lossless)]
    pub const fn duration_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.elapsed_since(earlier) as u64)
    }
}

impl From<Instant> for Timestamp {
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        // Truncation is the wrap of a 32-bit hardware counter
        Self(instant.as_millis() as u32)
    }
}

/// Length of `duration` in milliseconds, saturating at `u32::MAX`
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn span_millis(duration: Duration) -> u32 {
    let millis = duration.as_millis();
    if millis > u32::MAX as u64 {
        u32::MAX
    } else {
        millis as u32
    }
}

/// [`Clock`] backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Timestamp {
        Instant::now().into()
    }
}
