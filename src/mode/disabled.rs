use super::{Mode, State, powerup};
use crate::command::{Command, Instruction};
use crate::energy::Energy;
use crate::light::Light;
use crate::pulse::Pulse;
use crate::time::Timestamp;
use crate::tuning::Tuning;

/// Switch the light off and park it
pub(super) fn enter(light: Light, energy: Energy, now: Timestamp) -> (State, Light) {
    let state = State::new(Mode::Disabled, energy, now);
    (state, render(light, state, now))
}

pub(super) fn update(
    light: Light,
    state: State,
    now: Timestamp,
    command: Option<&Command>,
    tuning: &Tuning,
) -> (State, Light) {
    match command.map(|command| (command.instruction, command.argument)) {
        Some((Instruction::Enable, _)) => powerup::enter(light, state.energy, now, tuning),
        Some((Instruction::SetEnergy, argument)) => {
            let state = state.with_energy(Energy::new(argument));
            (state, render(light, state, now))
        }
        _ => (state, render(light, state, now)),
    }
}

fn render(light: Light, state: State, now: Timestamp) -> Light {
    light
        .switched(false, now)
        .with_pulse(Pulse::flat(0, state.started_at))
}
