//! Per-light state machine
//!
//! Each mode lives in its own module and exposes `enter` and `update`.
//! A handler takes the current light and state by value and returns the
//! next pair, so the mode variant stored in [`State`] carries its own
//! transition logic without any transition table.

mod cooldown;
mod disabled;
mod interactive;
mod powerup;

use crate::command::Command;
use crate::energy::Energy;
use crate::light::Light;
use crate::time::Timestamp;
use crate::tuning::Tuning;

const MODE_NAME_DISABLED: &str = "disabled";
const MODE_NAME_POWERUP: &str = "powerup";
const MODE_NAME_INTERACTIVE: &str = "interactive";
const MODE_NAME_COOLDOWN: &str = "cooldown";

const MODE_ID_DISABLED: u8 = 0;
const MODE_ID_POWERUP: u8 = 1;
const MODE_ID_INTERACTIVE: u8 = 2;
const MODE_ID_COOLDOWN: u8 = 3;

/// Behavioural mode of a light
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// LED forced off, waiting for an enable command
    Disabled = MODE_ID_DISABLED,
    /// Scripted fade-in after enabling
    Powerup = MODE_ID_POWERUP,
    /// Playing an energy-driven pulse
    Interactive = MODE_ID_INTERACTIVE,
    /// Dark pause between pulses
    Cooldown = MODE_ID_COOLDOWN,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_DISABLED => Self::Disabled,
            MODE_ID_POWERUP => Self::Powerup,
            MODE_ID_INTERACTIVE => Self::Interactive,
            MODE_ID_COOLDOWN => Self::Cooldown,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => MODE_NAME_DISABLED,
            Self::Powerup => MODE_NAME_POWERUP,
            Self::Interactive => MODE_NAME_INTERACTIVE,
            Self::Cooldown => MODE_NAME_COOLDOWN,
        }
    }
}

/// State machine of a single light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    mode: Mode,
    energy: Energy,
    started_at: Timestamp,
}

impl State {
    pub const fn new(mode: Mode, energy: Energy, started_at: Timestamp) -> Self {
        Self {
            mode,
            energy,
            started_at,
        }
    }

    /// Startup state
    pub const fn disabled(now: Timestamp) -> Self {
        Self::new(Mode::Disabled, Energy::ZERO, now)
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn energy(&self) -> Energy {
        self.energy
    }

    /// When the current mode was entered
    pub const fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Advance the state machine by one tick.
    ///
    /// Disable always wins over timeouts. Repeated calls with the same
    /// inputs and no command produce the same result.
    #[must_use]
    pub fn advance(
        self,
        light: Light,
        now: Timestamp,
        command: Option<&Command>,
        tuning: &Tuning,
    ) -> (Self, Light) {
        match self.mode {
            Mode::Disabled => disabled::update(light, self, now, command, tuning),
            Mode::Powerup => powerup::update(light, self, now, command, tuning),
            Mode::Interactive => interactive::update(light, self, now, command, tuning),
            Mode::Cooldown => cooldown::update(light, self, now, command, tuning),
        }
    }

    const fn with_energy(self, energy: Energy) -> Self {
        Self { energy, ..self }
    }
}
