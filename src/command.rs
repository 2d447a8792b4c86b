//! Serial commands
//!
//! A command line is one instruction character optionally followed by a
//! decimal argument, for example `s0.5` or `d`.

use crate::time::Timestamp;

const INSTRUCTION_ENABLE: char = 'e';
const INSTRUCTION_DISABLE: char = 'd';
const INSTRUCTION_STIMULATE: char = 's';
const INSTRUCTION_SET_ENERGY: char = 'n';
const INSTRUCTION_NOOP: char = '.';

/// Argument used when a command line carries none
pub const DEFAULT_ARGUMENT: f32 = 1.0;

/// Instruction selecting a mode change or action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Leave Disabled and start powering up
    Enable,
    /// Stop immediately, from any mode
    Disable,
    /// Excite the light, scaled by the argument
    Stimulate,
    /// Overwrite energy with the argument
    SetEnergy,
    /// Explicitly do nothing
    Noop,
    /// Unrecognized character, ignored by every mode
    Unknown(char),
}

impl Instruction {
    pub const fn from_char(value: char) -> Self {
        match value {
            INSTRUCTION_ENABLE => Self::Enable,
            INSTRUCTION_DISABLE => Self::Disable,
            INSTRUCTION_STIMULATE => Self::Stimulate,
            INSTRUCTION_SET_ENERGY => Self::SetEnergy,
            INSTRUCTION_NOOP => Self::Noop,
            other => Self::Unknown(other),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Enable => INSTRUCTION_ENABLE,
            Self::Disable => INSTRUCTION_DISABLE,
            Self::Stimulate => INSTRUCTION_STIMULATE,
            Self::SetEnergy => INSTRUCTION_SET_ENERGY,
            Self::Noop => INSTRUCTION_NOOP,
            Self::Unknown(other) => other,
        }
    }
}

/// Error returned when a command line cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line holds no instruction
    Empty,
    /// The text after the instruction is not a number
    InvalidArgument,
}

/// Instruction received over serial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    pub instruction: Instruction,
    /// Mode-specific parameter
    pub argument: f32,
    /// When the command arrived
    pub arrived_at: Timestamp,
}

impl Command {
    pub const fn new(instruction: Instruction, argument: f32, arrived_at: Timestamp) -> Self {
        Self {
            instruction,
            argument,
            arrived_at,
        }
    }

    /// Command that does nothing
    pub const fn noop(arrived_at: Timestamp) -> Self {
        Self::new(Instruction::Noop, DEFAULT_ARGUMENT, arrived_at)
    }

    /// Parse a command line received at `now`
    pub fn parse(line: &str, now: Timestamp) -> Result<Self, ParseError> {
        let line = line.trim();
        let Some(first) = line.chars().next() else {
            return Err(ParseError::Empty);
        };

        let argument = line[first.len_utf8()..].trim();
        let argument = if argument.is_empty() {
            DEFAULT_ARGUMENT
        } else {
            argument
                .parse::<f32>()
                .map_err(|_| ParseError::InvalidArgument)?
        };

        Ok(Self::new(Instruction::from_char(first), argument, now))
    }
}
