//! Command queue between the serial input and the tick loop.
//!
//! Built on `critical-section` and `heapless::Deque`, so a serial interrupt
//! handler can push commands while the main loop drains them. The loop takes
//! at most one command per tick; a full queue drops new commands.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::CommandSource;
use crate::command::{Command, ParseError};
use crate::time::Timestamp;

/// Error returned when the queue has no room for a command.
///
/// Holds the rejected command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueFull(pub Command);

/// Error returned when a command line cannot be queued
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitError {
    /// The line is not a valid command
    Parse(ParseError),
    /// The command was valid but the queue is full
    Full(Command),
}

impl From<ParseError> for SubmitError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<QueueFull> for SubmitError {
    fn from(QueueFull(command): QueueFull) -> Self {
        Self::Full(command)
    }
}

/// Bounded queue of pending commands
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the serial side.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for the tick loop.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Queue a command.
    ///
    /// Returns `Err(QueueFull(command))` if there is no room.
    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        let result = critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        });
        #[cfg(feature = "esp32-log")]
        if let Err(QueueFull(dropped)) = result {
            println!(
                "[CommandQueue.try_send] queue full, dropping {:?}",
                dropped.instruction
            );
        }
        result
    }

    /// Take the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue a parsed command.
    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }

    /// Parse a command line received at `now` and queue it.
    pub fn submit_line(&self, line: &str, now: Timestamp) -> Result<(), SubmitError> {
        let command = Command::parse(line, now)?;
        self.try_send(command)?;
        Ok(())
    }
}

/// Receiving half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.try_receive()
    }
}

impl<const SIZE: usize> CommandSource for CommandReceiver<'_, SIZE> {
    fn read_command(&mut self) -> Option<Command> {
        self.try_receive()
    }
}
