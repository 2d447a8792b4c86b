use super::{Mode, State, disabled, interactive};
use crate::command::{Command, Instruction};
use crate::energy::Energy;
use crate::light::Light;
use crate::pulse::Pulse;
use crate::time::{Timestamp, span_millis};
use crate::tuning::Tuning;

/// Switch the light off for the energy-dependent cooldown
pub(super) fn enter(light: Light, energy: Energy, now: Timestamp) -> (State, Light) {
    let state = State::new(Mode::Cooldown, energy, now);
    (state, render(light, state, now))
}

/// Energy is stored as it was on entry; decay is applied when leaving, from
/// the time spent here since entry.
pub(super) fn update(
    light: Light,
    state: State,
    now: Timestamp,
    command: Option<&Command>,
    tuning: &Tuning,
) -> (State, Light) {
    let elapsed = now.elapsed_since(state.started_at);
    let decayed = tuning.decay(state.energy, elapsed);

    let state = match command.map(|command| (command.instruction, command.argument)) {
        Some((Instruction::Disable, _)) => return disabled::enter(light, decayed, now),
        Some((Instruction::Stimulate, argument)) => {
            let energy = tuning.stimulate(decayed, argument);
            return interactive::enter(light, energy, now, tuning);
        }
        // A new energy level restarts the cooldown and its decay from now
        Some((Instruction::SetEnergy, argument)) => {
            return enter(light, Energy::new(argument), now);
        }
        _ => state,
    };

    if elapsed >= span_millis(tuning.cooldown.at(state.energy)) {
        return interactive::enter(light, tuning.decay(state.energy, elapsed), now, tuning);
    }

    (state, render(light, state, now))
}

fn render(light: Light, state: State, now: Timestamp) -> Light {
    light
        .switched(false, now)
        .with_pulse(Pulse::flat(0, state.started_at))
}
