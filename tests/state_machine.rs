mod tests {
    use gasworks::{
        Command, Duration, Energy, Instruction, Light, Mode, State, Timestamp, Tuning,
    };

    const TUNING: Tuning = Tuning::DEFAULT;

    fn at(millis: u32) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    /// Advance without a command
    fn idle(state: State, light: Light, millis: u32) -> (State, Light) {
        state.advance(light, at(millis), None, &TUNING)
    }

    fn send(
        state: State,
        light: Light,
        instruction: Instruction,
        argument: f32,
        millis: u32,
    ) -> (State, Light) {
        let command = Command::new(instruction, argument, at(millis));
        state.advance(light, at(millis), Some(&command), &TUNING)
    }

    fn in_mode(mode: Mode, energy: f32, millis: u32) -> (State, Light) {
        idle(State::new(mode, Energy::new(energy), at(millis)), Light::new(3), millis)
    }

    fn assert_energy_near(state: State, expected: f32) {
        let actual = state.energy().value();
        assert!(
            (actual - expected).abs() < 1e-5,
            "energy {actual}, expected {expected}"
        );
    }

    #[test]
    fn test_mode_ids() {
        for mode in [Mode::Disabled, Mode::Powerup, Mode::Interactive, Mode::Cooldown] {
            assert_eq!(Mode::from_raw(mode as u8), Some(mode));
        }
        assert_eq!(Mode::from_raw(4), None);
        assert_eq!(Mode::Cooldown.as_str(), "cooldown");
    }

    #[test]
    fn test_startup_is_disabled() {
        let (state, light) = idle(State::disabled(at(0)), Light::new(3), 0);
        assert_eq!(state.mode(), Mode::Disabled);
        assert!(!light.is_on());
        assert_eq!(light.brightness_at(at(0)), 0);
    }

    #[test]
    fn test_disable_from_any_mode() {
        for mode in [Mode::Disabled, Mode::Powerup, Mode::Interactive, Mode::Cooldown] {
            let (state, light) = in_mode(mode, 0.5, 0);
            let (state, light) = idle(state, light, 100);
            let (state, light) = send(state, light, Instruction::Disable, 1.0, 150);
            assert_eq!(state.mode(), Mode::Disabled, "from {}", mode.as_str());
            assert!(!light.is_on());
            assert_eq!(light.brightness_at(at(150)), 0);
        }
    }

    #[test]
    fn test_disable_wins_over_timeout() {
        let (state, light) = in_mode(Mode::Powerup, 0.0, 0);
        let (state, _) = send(state, light, Instruction::Disable, 1.0, 10_000);
        assert_eq!(state.mode(), Mode::Disabled);

        let (state, light) = in_mode(Mode::Cooldown, 0.0, 0);
        let (state, _) = send(state, light, Instruction::Disable, 1.0, 10_000);
        assert_eq!(state.mode(), Mode::Disabled);
    }

    #[test]
    fn test_enable_starts_powerup() {
        let (state, light) = in_mode(Mode::Disabled, 0.0, 0);
        let (state, light) = send(state, light, Instruction::Enable, 1.0, 100);
        assert_eq!(state.mode(), Mode::Powerup);
        assert_eq!(state.started_at(), at(100));
        assert!(light.is_on());
        assert_eq!(light.on_at(), at(100));
    }

    #[test]
    fn test_disabled_ignores_stimulus() {
        let (state, light) = in_mode(Mode::Disabled, 0.0, 0);
        let (next, next_light) = send(state, light, Instruction::Stimulate, 1.0, 100);
        assert_eq!(next, state);
        assert_eq!(next_light, light);
    }

    #[test]
    fn test_powerup_length_is_exact() {
        let (state, light) = in_mode(Mode::Disabled, 0.0, 0);
        let (state, light) = send(state, light, Instruction::Enable, 1.0, 100);

        let (powering, light) = idle(state, light, 1_100);
        assert_eq!(powering.mode(), Mode::Powerup);
        assert_eq!(light.brightness_at(at(1_100)), 48);

        let (still, light) = idle(powering, light, 2_099);
        assert_eq!(still.mode(), Mode::Powerup);

        let (done, light) = idle(still, light, 2_100);
        assert_eq!(done.mode(), Mode::Interactive);
        assert_eq!(done.started_at(), at(2_100));
        assert!(light.is_on());
    }

    #[test]
    fn test_late_powerup_tick_goes_to_interactive() {
        let (state, light) = in_mode(Mode::Powerup, 0.0, 0);
        let (state, _) = idle(state, light, 60_000);
        assert_eq!(state.mode(), Mode::Interactive);
    }

    #[test]
    fn test_powerup_ignores_commands_except_disable() {
        let (state, light) = in_mode(Mode::Powerup, 0.0, 0);
        for instruction in [
            Instruction::Enable,
            Instruction::Stimulate,
            Instruction::SetEnergy,
            Instruction::Noop,
            Instruction::Unknown('x'),
        ] {
            let (next, next_light) = send(state, light, instruction, 0.9, 500);
            assert_eq!(next, state);
            assert_eq!(next_light, idle(state, light, 500).1);
        }
    }

    #[test]
    fn test_stimulate_in_interactive() {
        let (state, light) = in_mode(Mode::Interactive, 0.0, 0);
        let (state, light) = send(state, light, Instruction::Stimulate, 1.0, 1_000);

        assert_eq!(state.mode(), Mode::Interactive);
        assert_eq!(state.energy(), Energy::new(0.2));
        assert_eq!(state.started_at(), at(1_000));

        let duration = TUNING.duration.at(Energy::new(0.2));
        assert_eq!(duration, Duration::from_millis(1_040));
        assert_eq!(light.pulse().start_low.at, at(1_000));
        assert_eq!(light.pulse().end_low.at, at(2_040));
        assert!(light.pulse().is_ordered());
    }

    #[test]
    fn test_stimulate_argument_scales_increment() {
        let (state, light) = in_mode(Mode::Interactive, 0.5, 0);
        let (state, _) = send(state, light, Instruction::Stimulate, 0.5, 100);
        assert!((state.energy().value() - 0.6).abs() < 1e-6);

        let (state, light) = in_mode(Mode::Interactive, 0.95, 0);
        let (state, _) = send(state, light, Instruction::Stimulate, 1.0, 100);
        assert_eq!(state.energy(), Energy::FULL);
    }

    #[test]
    fn test_interactive_completes_into_cooldown() {
        let (state, light) = in_mode(Mode::Interactive, 0.0, 0);
        let end = light.pulse().end_low.at;

        let (state, light) = idle(state, light, end.as_millis() - 1);
        assert_eq!(state.mode(), Mode::Interactive);
        assert!(light.is_on());

        let (state, light) = idle(state, light, end.as_millis());
        assert_eq!(state.mode(), Mode::Cooldown);
        assert_eq!(state.started_at(), end);
        assert!(!light.is_on());
        assert_eq!(light.brightness_at(end), 0);
    }

    #[test]
    fn test_cooldown_times_out_into_interactive() {
        let (state, light) = in_mode(Mode::Cooldown, 0.0, 0);
        assert_eq!(TUNING.cooldown.at(state.energy()), Duration::from_millis(4_000));

        let (state, light) = idle(state, light, 3_999);
        assert_eq!(state.mode(), Mode::Cooldown);

        let (state, light) = idle(state, light, 4_001);
        assert_eq!(state.mode(), Mode::Interactive);
        assert_eq!(state.started_at(), at(4_001));
        assert!(light.is_on());
        assert_eq!(light.pulse().start_low.at, at(4_001));
    }

    #[test]
    fn test_cooldown_decays_energy() {
        // Full energy cools down for 800 ms and loses 0.05 per second
        let (state, light) = in_mode(Mode::Cooldown, 1.0, 0);
        let (state, _) = idle(state, light, 1_000);
        assert_eq!(state.mode(), Mode::Interactive);
        assert!(state.energy() < Energy::FULL);
        assert!(state.energy() > Energy::new(0.9));
    }

    #[test]
    fn test_stimulus_preempts_cooldown() {
        let (state, light) = in_mode(Mode::Cooldown, 0.0, 0);
        let (state, light) = send(state, light, Instruction::Stimulate, 1.0, 500);
        assert_eq!(state.mode(), Mode::Interactive);
        assert_eq!(state.started_at(), at(500));
        assert_eq!(state.energy(), Energy::new(0.2));
        assert!(light.is_on());
    }

    #[test]
    fn test_stimulus_decays_cooldown_energy_first() {
        // 2 s in Cooldown costs 0.1, the stimulus then adds 0.2
        let (state, light) = in_mode(Mode::Cooldown, 0.8, 0);
        let (state, light) = send(state, light, Instruction::Stimulate, 1.0, 2_000);
        assert_eq!(state.mode(), Mode::Interactive);
        assert_eq!(state.started_at(), at(2_000));
        assert_energy_near(state, 0.9);
        assert!(light.is_on());
    }

    #[test]
    fn test_set_energy_restarts_cooldown() {
        let (state, light) = in_mode(Mode::Cooldown, 0.0, 0);
        let (state, light) = send(state, light, Instruction::SetEnergy, 0.8, 3_000);
        assert_eq!(state.mode(), Mode::Cooldown);
        assert_eq!(state.energy(), Energy::new(0.8));
        assert_eq!(state.started_at(), at(3_000));
        assert!(!light.is_on());

        // Cooldown at 0.8 lasts 1440 ms and decays only from the new start
        let (state, light) = idle(state, light, 4_439);
        assert_eq!(state.mode(), Mode::Cooldown);
        let (state, _) = idle(state, light, 4_440);
        assert_eq!(state.mode(), Mode::Interactive);
        assert_energy_near(state, 0.8 - 0.072);
    }

    #[test]
    fn test_set_energy() {
        let (state, light) = in_mode(Mode::Disabled, 0.0, 0);
        let (state, light) = send(state, light, Instruction::SetEnergy, 0.75, 10);
        assert_eq!(state.mode(), Mode::Disabled);
        assert_eq!(state.energy(), Energy::new(0.75));

        let (state, _) = send(state, light, Instruction::SetEnergy, 4.0, 20);
        assert_eq!(state.energy(), Energy::FULL);

        let (state, light) = in_mode(Mode::Interactive, 0.0, 0);
        let (state, _) = send(state, light, Instruction::SetEnergy, 0.5, 10);
        assert_eq!(state.mode(), Mode::Interactive);
        assert_eq!(state.energy(), Energy::new(0.5));
        assert_eq!(state.started_at(), at(0));
    }

    #[test]
    fn test_unknown_instruction_is_ignored() {
        for mode in [Mode::Disabled, Mode::Powerup, Mode::Interactive, Mode::Cooldown] {
            let (state, light) = in_mode(mode, 0.3, 0);
            let expected = idle(state, light, 200);
            let actual = send(state, light, Instruction::Unknown('?'), 1.0, 200);
            assert_eq!(actual, expected, "in {}", mode.as_str());
        }
    }

    #[test]
    fn test_enable_outside_disabled_is_ignored() {
        let (state, light) = in_mode(Mode::Interactive, 0.3, 0);
        assert_eq!(
            send(state, light, Instruction::Enable, 1.0, 200),
            idle(state, light, 200)
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        for mode in [Mode::Disabled, Mode::Powerup, Mode::Interactive, Mode::Cooldown] {
            for millis in [0, 250, 999, 3_000] {
                let (state, light) = in_mode(mode, 0.4, 0);
                let first = idle(state, light, millis);
                let second = idle(state, light, millis);
                assert_eq!(first, second);

                let noop = send(state, light, Instruction::Noop, 1.0, millis);
                assert_eq!(noop, first);

                let again = idle(first.0, first.1, millis);
                assert_eq!(again, first, "{} at {millis}", mode.as_str());
            }
        }
    }

    #[test]
    fn test_interactive_keyframes_stay_ordered() {
        let (mut state, mut light) = in_mode(Mode::Disabled, 0.0, 0);
        (state, light) = send(state, light, Instruction::Enable, 1.0, 0);
        for tick in 1..2_000u32 {
            let millis = tick * 10;
            (state, light) = if tick % 37 == 0 {
                send(state, light, Instruction::Stimulate, 1.0, millis)
            } else {
                idle(state, light, millis)
            };
            if state.mode() == Mode::Interactive {
                assert!(light.pulse().is_ordered(), "{:?}", light.pulse());
            }
        }
    }

    #[test]
    fn test_cooldown_across_timestamp_wrap() {
        let start = u32::MAX - 1_000;
        let (state, light) = in_mode(Mode::Cooldown, 0.0, start);
        let (state, light) = idle(state, light, 2_000);
        assert_eq!(state.mode(), Mode::Cooldown);
        let (state, _) = idle(state, light, 3_000);
        assert_eq!(state.mode(), Mode::Interactive);
    }
}
