use super::{Mode, State, cooldown, disabled};
use crate::command::{Command, Instruction};
use crate::energy::Energy;
use crate::light::Light;
use crate::time::Timestamp;
use crate::tuning::Tuning;

/// Schedule a fresh pulse starting at `now`
pub(super) fn enter(
    light: Light,
    energy: Energy,
    now: Timestamp,
    tuning: &Tuning,
) -> (State, Light) {
    let state = State::new(Mode::Interactive, energy, now);
    (state, render(light, state, now, tuning))
}

pub(super) fn update(
    light: Light,
    state: State,
    now: Timestamp,
    command: Option<&Command>,
    tuning: &Tuning,
) -> (State, Light) {
    let state = match command.map(|command| (command.instruction, command.argument)) {
        Some((Instruction::Disable, _)) => return disabled::enter(light, state.energy, now),
        Some((Instruction::Stimulate, argument)) => {
            // Restart the pulse with the raised energy
            let energy = tuning.stimulate(state.energy, argument);
            return enter(light, energy, now, tuning);
        }
        Some((Instruction::SetEnergy, argument)) => state.with_energy(Energy::new(argument)),
        _ => state,
    };

    let light = render(light, state, now, tuning);
    if light.pulse().is_complete(now) {
        return cooldown::enter(light, state.energy, now);
    }

    (state, light)
}

fn render(light: Light, state: State, now: Timestamp, tuning: &Tuning) -> Light {
    light
        .switched(true, now)
        .with_pulse(tuning.interactive_pulse(state.energy, state.started_at))
}
