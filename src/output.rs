//! Output adapter for addressable LED strips
//!
//! Each light pin is treated as a pixel index. Brightness is written as a
//! white pixel and the whole strip is pushed through gamma correction once
//! per tick, on [`LightOutput::flush`].

use smart_leds::{RGB8, SmartLedsWrite, gamma};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LightOutput;
use crate::math8::scale8;

/// [`LightOutput`] writing to a `smart-leds` driver
pub struct StripOutput<W, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
    max_brightness: u8,
    failed_writes: u32,
}

impl<W, const N: usize> StripOutput<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Create an output driving `N` pixels at full scale
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [RGB8 { r: 0, g: 0, b: 0 }; N],
            max_brightness: u8::MAX,
            failed_writes: 0,
        }
    }

    /// Scale every pixel down to at most `max_brightness`
    #[must_use]
    pub const fn with_max_brightness(mut self, max_brightness: u8) -> Self {
        self.max_brightness = max_brightness;
        self
    }

    /// Pixels as they will be written on the next flush, before gamma
    pub const fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    /// Number of flushes the driver rejected
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LightOutput for StripOutput<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn set_brightness(&mut self, pin: u8, brightness: u8) {
        // Pins beyond the strip have no pixel to drive
        if let Some(pixel) = self.pixels.get_mut(usize::from(pin)) {
            let value = scale8(brightness, self.max_brightness);
            *pixel = RGB8 {
                r: value,
                g: value,
                b: value,
            };
        }
    }

    fn set_on(&mut self, pin: u8, on: bool) {
        if !on {
            self.set_brightness(pin, 0);
        }
    }

    fn flush(&mut self) {
        // The core never sees write failures; the next tick writes the full strip again
        if self.writer.write(gamma(self.pixels.iter().copied())).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!(
                "[StripOutput.flush] write failed ({} so far)",
                self.failed_writes
            );
        }
    }
}
