use super::{Mode, State, disabled, interactive};
use crate::command::{Command, Instruction};
use crate::energy::Energy;
use crate::light::Light;
use crate::time::{Timestamp, span_millis};
use crate::tuning::Tuning;

/// Start the power-up ramp at `now`
pub(super) fn enter(
    light: Light,
    energy: Energy,
    now: Timestamp,
    tuning: &Tuning,
) -> (State, Light) {
    let state = State::new(Mode::Powerup, energy, now);
    (state, render(light, state, now, tuning))
}

/// Only disable interrupts the ramp; every other command is ignored.
pub(super) fn update(
    light: Light,
    state: State,
    now: Timestamp,
    command: Option<&Command>,
    tuning: &Tuning,
) -> (State, Light) {
    if command.is_some_and(|command| command.instruction == Instruction::Disable) {
        return disabled::enter(light, state.energy, now);
    }

    let elapsed = now.elapsed_since(state.started_at);
    if elapsed >= span_millis(tuning.powerup_length) {
        return interactive::enter(light, state.energy, now, tuning);
    }

    (state, render(light, state, now, tuning))
}

fn render(light: Light, state: State, now: Timestamp, tuning: &Tuning) -> Light {
    light
        .switched(true, now)
        .with_pulse(tuning.powerup_pulse(state.energy, state.started_at))
}
