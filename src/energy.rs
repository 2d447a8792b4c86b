//! Excitation level of a light
//!
//! Energy modulates every timing and brightness bound of a light. Low energy
//! selects the `low_energy` end of each tuning range, full energy the
//! `high_energy` end, and everything in between is linearly interpolated.

use embassy_time::Duration;
use libm::roundf;

/// Energy level, always within `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Energy(f32);

impl Energy {
    /// No excitation
    pub const ZERO: Self = Self(0.0);
    /// Full excitation
    pub const FULL: Self = Self(1.0);

    /// Create an energy level, clamping into range.
    ///
    /// NaN is treated as zero.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Energy raised by `amount`. Non-positive amounts leave it unchanged.
    pub fn raised_by(self, amount: f32) -> Self {
        if amount > 0.0 {
            Self::new(self.0 + amount)
        } else {
            self
        }
    }

    /// Energy lowered by `amount`, floored at zero
    pub fn decayed_by(self, amount: f32) -> Self {
        if amount > 0.0 {
            Self::new(self.0 - amount)
        } else {
            self
        }
    }

    /// `low + energy * (high - low)`
    pub fn lerp(self, low: f32, high: f32) -> f32 {
        low + self.0 * (high - low)
    }

    /// Interpolate an 8-bit intensity between its low and high energy values
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn interpolate_u8(self, low: u8, high: u8) -> u8 {
        let value = roundf(self.lerp(f32::from(low), f32::from(high)));
        let (min, max) = if low <= high { (low, high) } else { (high, low) };
        (value as u8).clamp(min, max)
    }

    /// Interpolate a duration between its low and high energy values
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn interpolate_duration(self, low: Duration, high: Duration) -> Duration {
        let (low_ms, high_ms) = (low.as_millis(), high.as_millis());
        let value = roundf(self.lerp(low_ms as f32, high_ms as f32));
        let (min, max) = if low_ms <= high_ms {
            (low_ms, high_ms)
        } else {
            (high_ms, low_ms)
        };
        Duration::from_millis((value as u64).clamp(min, max))
    }
}

impl From<f32> for Energy {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
