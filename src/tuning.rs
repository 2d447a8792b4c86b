//! Tunable behaviour constants
//!
//! Every range pairs a low energy (`_LE`) value with a high energy (`_HE`)
//! value. The effective value for a light is interpolated by its energy.

use embassy_time::Duration;

use crate::energy::Energy;
use crate::math8::fraction_of;
use crate::pulse::{KeyFrame, Pulse};
use crate::time::{Timestamp, span_millis};

const DURATION_LE: Duration = Duration::from_millis(1_200);
const DURATION_HE: Duration = Duration::from_millis(400);
const COOLDOWN_LE: Duration = Duration::from_millis(4_000);
const COOLDOWN_HE: Duration = Duration::from_millis(800);
const BRIGHT_LOWER_LE: u8 = 8;
const BRIGHT_LOWER_HE: u8 = 64;
const BRIGHT_UPPER_LE: u8 = 96;
const BRIGHT_UPPER_HE: u8 = 255;
const POWERUP_LENGTH: Duration = Duration::from_millis(2_000);
const PULSE_RISE: u8 = 64;
const PULSE_HOLD: u8 = 128;
const STIMULUS_GAIN: f32 = 0.2;
const DECAY_PER_SECOND: f32 = 0.05;

/// Pair of durations selected by energy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub low_energy: Duration,
    pub high_energy: Duration,
}

impl DurationRange {
    pub const fn new(low_energy: Duration, high_energy: Duration) -> Self {
        Self {
            low_energy,
            high_energy,
        }
    }

    /// Duration for the given energy level
    pub fn at(self, energy: Energy) -> Duration {
        energy.interpolate_duration(self.low_energy, self.high_energy)
    }
}

/// Pair of intensities selected by energy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRange {
    pub low_energy: u8,
    pub high_energy: u8,
}

impl IntensityRange {
    pub const fn new(low_energy: u8, high_energy: u8) -> Self {
        Self {
            low_energy,
            high_energy,
        }
    }

    /// Intensity for the given energy level
    pub fn at(self, energy: Energy) -> u8 {
        energy.interpolate_u8(self.low_energy, self.high_energy)
    }
}

/// Timing of the pulse keyframes as fractions (0-255) of the pulse duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseShape {
    /// End of the rise to the upper bound
    pub rise: u8,
    /// End of the fall to the lower bound. Values below `rise` act as `rise`.
    pub hold: u8,
}

/// Behaviour constants shared by every light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Length of an interactive pulse
    pub duration: DurationRange,
    /// Dark time between pulses
    pub cooldown: DurationRange,
    /// Brightness the pulse settles to before fading out
    pub bright_lower: IntensityRange,
    /// Peak brightness of the pulse
    pub bright_upper: IntensityRange,
    /// Length of the power-up ramp
    pub powerup_length: Duration,
    pub shape: PulseShape,
    /// Energy added by a stimulus with argument 1.0
    pub stimulus_gain: f32,
    /// Energy lost per second of cooldown
    pub decay_per_second: f32,
}

impl Tuning {
    pub const DEFAULT: Self = Self {
        duration: DurationRange::new(DURATION_LE, DURATION_HE),
        cooldown: DurationRange::new(COOLDOWN_LE, COOLDOWN_HE),
        bright_lower: IntensityRange::new(BRIGHT_LOWER_LE, BRIGHT_LOWER_HE),
        bright_upper: IntensityRange::new(BRIGHT_UPPER_LE, BRIGHT_UPPER_HE),
        powerup_length: POWERUP_LENGTH,
        shape: PulseShape {
            rise: PULSE_RISE,
            hold: PULSE_HOLD,
        },
        stimulus_gain: STIMULUS_GAIN,
        decay_per_second: DECAY_PER_SECOND,
    };

    /// Interactive pulse for `energy` starting at `start`
    pub fn interactive_pulse(&self, energy: Energy, start: Timestamp) -> Pulse {
        let span = span_millis(self.duration.at(energy));
        let rise = self.shape.rise;
        let hold = self.shape.hold.max(rise);
        let upper = self.bright_upper.at(energy);
        let lower = self.bright_lower.at(energy);

        Pulse::new(
            KeyFrame::new(0, start),
            KeyFrame::new(upper, start.offset_by(fraction_of(span, rise))),
            KeyFrame::new(lower, start.offset_by(fraction_of(span, hold))),
            KeyFrame::new(0, start.offset_by(span)),
        )
    }

    /// Power-up ramp for `energy` starting at `start`
    pub fn powerup_pulse(&self, energy: Energy, start: Timestamp) -> Pulse {
        Pulse::ramp(
            KeyFrame::new(0, start),
            KeyFrame::new(self.bright_upper.at(energy), start.after(self.powerup_length)),
        )
    }

    /// Energy left after `elapsed_ms` of idle decay
    #[allow(clippy::cast_precision_loss)]
    pub fn decay(&self, energy: Energy, elapsed_ms: u32) -> Energy {
        energy.decayed_by(self.decay_per_second * (elapsed_ms as f32 / 1000.0))
    }

    /// Energy after a stimulus carrying `argument`
    pub fn stimulate(&self, energy: Energy, argument: f32) -> Energy {
        energy.raised_by(self.stimulus_gain * argument)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
