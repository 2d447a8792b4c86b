//! Piecewise-linear brightness pulse
//!
//! A pulse is four keyframes. Brightness ramps from `start_low` to
//! `start_high`, moves to `end_high`, then decays to `end_low`. Keyframe
//! times are compared relative to `start_low`, so a pulse spanning the
//! counter wrap renders the same as any other.

use crate::math8::{blend8, progress8};
use crate::time::Timestamp;

/// Waypoint of a brightness pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyFrame {
    /// Brightness at this point (0-255)
    pub intensity: u8,
    /// When the brightness is reached
    pub at: Timestamp,
}

impl KeyFrame {
    pub const fn new(intensity: u8, at: Timestamp) -> Self {
        Self { intensity, at }
    }
}

/// One brightness pulse cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulse {
    pub start_low: KeyFrame,
    pub start_high: KeyFrame,
    pub end_high: KeyFrame,
    pub end_low: KeyFrame,
}

impl Pulse {
    pub const fn new(
        start_low: KeyFrame,
        start_high: KeyFrame,
        end_high: KeyFrame,
        end_low: KeyFrame,
    ) -> Self {
        Self {
            start_low,
            start_high,
            end_high,
            end_low,
        }
    }

    /// Degenerate pulse holding `intensity` from `at` onwards
    pub const fn flat(intensity: u8, at: Timestamp) -> Self {
        let frame = KeyFrame::new(intensity, at);
        Self::new(frame, frame, frame, frame)
    }

    /// Single linear ramp from `from` to `to`, holding `to` afterwards
    pub const fn ramp(from: KeyFrame, to: KeyFrame) -> Self {
        Self::new(from, to, to, to)
    }

    /// Keyframes in playback order
    pub const fn frames(&self) -> [KeyFrame; 4] {
        [self.start_low, self.start_high, self.end_high, self.end_low]
    }

    /// Check that keyframe times never go backwards.
    ///
    /// The whole pulse must also fit within half the counter range, otherwise
    /// a wrapped keyframe would be indistinguishable from an inverted one.
    pub fn is_ordered(&self) -> bool {
        let origin = self.start_low.at;
        let mut previous = 0;
        for frame in self.frames() {
            if frame.at.signed_since(origin) < 0 {
                return false;
            }
            let offset = frame.at.elapsed_since(origin);
            if offset < previous {
                return false;
            }
            previous = offset;
        }
        true
    }

    /// Check if the pulse has played out at `now`
    pub const fn is_complete(&self, now: Timestamp) -> bool {
        now.is_at_or_after(self.end_low.at)
    }

    /// Brightness of the pulse at `now`
    ///
    /// Zero before the pulse starts, `end_low` intensity once it has ended.
    pub fn brightness_at(&self, now: Timestamp) -> u8 {
        let origin = self.start_low.at;
        if !now.is_at_or_after(origin) {
            return 0;
        }

        let elapsed = now.elapsed_since(origin);
        let frames = self.frames();
        for segment in frames.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            let to_offset = to.at.elapsed_since(origin);
            if elapsed < to_offset {
                let from_offset = from.at.elapsed_since(origin);
                let progress = progress8(elapsed - from_offset, to_offset - from_offset);
                return blend8(from.intensity, to.intensity, progress);
            }
        }

        self.end_low.intensity
    }
}
