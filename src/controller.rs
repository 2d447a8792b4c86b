#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;
use crate::light::Light;
use crate::mode::State;
use crate::time::Timestamp;
use crate::tuning::Tuning;
use crate::{CommandSource, LightOutput};

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig<const N: usize> {
    /// Output pin of every light, in light order
    pub pins: [u8; N],
    pub tuning: Tuning,
}

/// Controller - owns every light and its state machine
///
/// Each tick advances every light exactly once with the same command and
/// writes the results to the output.
pub struct Controller<O: LightOutput, const N: usize> {
    output: O,
    tuning: Tuning,
    lights: [Light; N],
    states: [State; N],
}

impl<O: LightOutput, const N: usize> Controller<O, N> {
    /// Create a controller with every light disabled at `now`
    pub fn new(output: O, config: &ControllerConfig<N>, now: Timestamp) -> Self {
        Self {
            output,
            tuning: config.tuning,
            lights: config.pins.map(Light::new),
            states: [State::disabled(now); N],
        }
    }

    /// Process one tick
    ///
    /// Call this continuously with the current time and the command read
    /// this tick, if any.
    pub fn tick(&mut self, now: Timestamp, command: Option<Command>) {
        for (light, state) in self.lights.iter_mut().zip(self.states.iter_mut()) {
            let (next_state, next_light) =
                state.advance(*light, now, command.as_ref(), &self.tuning);

            #[cfg(feature = "esp32-log")]
            if next_state.mode() != state.mode() {
                println!(
                    "[Controller.tick] pin {}: {} -> {} (energy {})",
                    light.pin(),
                    state.mode().as_str(),
                    next_state.mode().as_str(),
                    next_state.energy().value()
                );
            }

            *state = next_state;
            *light = next_light;

            self.output.set_on(light.pin(), light.is_on());
            self.output.set_brightness(light.pin(), light.brightness_at(now));
        }
        self.output.flush();
    }

    /// Read at most one command from `source` and process one tick
    pub fn poll<S: CommandSource>(&mut self, now: Timestamp, source: &mut S) {
        let command = source.read_command();
        self.tick(now, command);
    }

    pub fn lights(&self) -> &[Light; N] {
        &self.lights
    }

    pub fn states(&self) -> &[State; N] {
        &self.states
    }

    pub fn light(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    pub fn state(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a reference to the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
