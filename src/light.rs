use crate::pulse::Pulse;
use crate::time::Timestamp;

/// Hardware-facing record of a single LED
///
/// Lights are plain values: mode handlers take one in and hand back the
/// updated copy, so a handler can never alias another light's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Light {
    pin: u8,
    on: bool,
    pulse: Pulse,
    on_at: Timestamp,
    off_at: Timestamp,
}

impl Light {
    /// Create a switched-off light on `pin`
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            on: false,
            pulse: Pulse::flat(0, Timestamp::ZERO),
            on_at: Timestamp::ZERO,
            off_at: Timestamp::ZERO,
        }
    }

    /// Output pin the LED is connected to
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    /// Check if the LED is switched on
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Current pulse waveform
    pub const fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    /// When the LED was last switched on
    pub const fn on_at(&self) -> Timestamp {
        self.on_at
    }

    /// When the LED was last switched off
    pub const fn off_at(&self) -> Timestamp {
        self.off_at
    }

    /// Switch the LED on or off.
    ///
    /// Switch times only move when the flag actually changes.
    #[must_use]
    pub const fn switched(mut self, on: bool, now: Timestamp) -> Self {
        if self.on != on {
            if on {
                self.on_at = now;
            } else {
                self.off_at = now;
            }
            self.on = on;
        }
        self
    }

    /// Replace the pulse waveform
    #[must_use]
    pub const fn with_pulse(mut self, pulse: Pulse) -> Self {
        self.pulse = pulse;
        self
    }

    /// Output brightness at `now`, zero while switched off
    pub fn brightness_at(&self, now: Timestamp) -> u8 {
        if self.on {
            self.pulse.brightness_at(now)
        } else {
            0
        }
    }
}
