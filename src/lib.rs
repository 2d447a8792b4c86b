#![no_std]

pub mod command;
pub mod controller;
pub mod energy;
pub mod light;
pub mod math8;
pub mod mode;
pub mod output;
pub mod pulse;
pub mod queue;
pub mod scheduler;
pub mod time;
pub mod tuning;

pub use command::{Command, Instruction, ParseError};
pub use controller::{Controller, ControllerConfig};
pub use energy::Energy;
pub use light::Light;
pub use mode::{Mode, State};
pub use output::StripOutput;
pub use pulse::{KeyFrame, Pulse};
pub use queue::{CommandQueue, CommandReceiver, CommandSender, QueueFull, SubmitError};
pub use scheduler::{TickResult, TickScheduler};
pub use time::{EmbassyClock, Timestamp};
pub use tuning::{DurationRange, IntensityRange, PulseShape, Tuning};

pub use embassy_time::{Duration, Instant};

/// Abstract LED output trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait LightOutput {
    /// Write the brightness of the LED on `pin`
    fn set_brightness(&mut self, pin: u8, brightness: u8);

    /// Switch the LED on `pin` on or off
    fn set_on(&mut self, pin: u8, on: bool);

    /// Called once per tick after every light was written
    fn flush(&mut self) {}
}

/// Source of serial commands
pub trait CommandSource {
    /// Take the next pending command, if any.
    ///
    /// A command returned here is delivered exactly once.
    fn read_command(&mut self) -> Option<Command>;
}

impl CommandSource for Option<Command> {
    fn read_command(&mut self) -> Option<Command> {
        self.take()
    }
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now(&self) -> Timestamp;
}
