//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::Duration;

use crate::controller::Controller;
use crate::time::{Timestamp, span_millis};
use crate::{CommandSource, LightOutput};

/// Default tick rate (100 ticks per second).
pub const DEFAULT_TICK_RATE: u32 = 100;

/// Default tick period based on the tick rate.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1000 / DEFAULT_TICK_RATE as u64);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Timestamp,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Polls the command source and advances the controller
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(controller, receiver);
///
/// loop {
///     let result = scheduler.tick(clock.now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<O: LightOutput, S: CommandSource, const N: usize> {
    controller: Controller<O, N>,
    source: S,
    next_tick: Option<Timestamp>,
    tick_period: Duration,
}

impl<O: LightOutput, S: CommandSource, const N: usize> TickScheduler<O, S, N> {
    /// Create a new tick scheduler.
    ///
    /// Uses `DEFAULT_TICK_PERIOD` (100 Hz) for tick timing.
    pub fn new(controller: Controller<O, N>, source: S) -> Self {
        Self::with_tick_period(controller, source, DEFAULT_TICK_PERIOD)
    }

    /// Create a new tick scheduler with a custom tick period.
    pub fn with_tick_period(
        controller: Controller<O, N>,
        source: S,
        tick_period: Duration,
    ) -> Self {
        Self {
            controller,
            source,
            next_tick: None,
            tick_period,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// If the loop has fallen more than two periods behind, the backlog is
    /// skipped instead of caught up.
    pub fn tick(&mut self, now: Timestamp) -> TickResult {
        let period = span_millis(self.tick_period);
        let max_drift = i32::try_from(period.saturating_mul(2)).unwrap_or(i32::MAX);
        let scheduled = match self.next_tick {
            Some(next) if now.signed_since(next) <= max_drift => next,
            _ => now,
        };

        self.controller.poll(now, &mut self.source);

        let next_tick = scheduled.offset_by(period);
        self.next_tick = Some(next_tick);

        let sleep_duration = if next_tick.is_at_or_after(now) {
            next_tick.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &Controller<O, N> {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut Controller<O, N> {
        &mut self.controller
    }
}
