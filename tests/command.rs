mod tests {
    use gasworks::{Command, Instruction, ParseError, Timestamp};

    const NOW: Timestamp = Timestamp::from_millis(1_234);

    #[test]
    fn test_parse_with_argument() {
        let command = Command::parse("s0.5", NOW).unwrap();
        assert_eq!(command.instruction, Instruction::Stimulate);
        assert_eq!(command.argument, 0.5);
        assert_eq!(command.arrived_at, NOW);
    }

    #[test]
    fn test_parse_defaults_argument() {
        let command = Command::parse("d", NOW).unwrap();
        assert_eq!(command.instruction, Instruction::Disable);
        assert_eq!(command.argument, 1.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let command = Command::parse("  n 0.25 \r\n", NOW).unwrap();
        assert_eq!(command.instruction, Instruction::SetEnergy);
        assert_eq!(command.argument, 0.25);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("", NOW), Err(ParseError::Empty));
        assert_eq!(Command::parse(" \r\n", NOW), Err(ParseError::Empty));
        assert_eq!(Command::parse("sabc", NOW), Err(ParseError::InvalidArgument));
    }

    #[test]
    fn test_parse_unknown_instruction() {
        let command = Command::parse("x", NOW).unwrap();
        assert_eq!(command.instruction, Instruction::Unknown('x'));

        let command = Command::parse("é2", NOW).unwrap();
        assert_eq!(command.instruction, Instruction::Unknown('é'));
        assert_eq!(command.argument, 2.0);
    }

    #[test]
    fn test_instruction_chars() {
        for instruction in [
            Instruction::Enable,
            Instruction::Disable,
            Instruction::Stimulate,
            Instruction::SetEnergy,
            Instruction::Noop,
            Instruction::Unknown('z'),
        ] {
            assert_eq!(Instruction::from_char(instruction.as_char()), instruction);
        }
        assert_eq!(Command::noop(NOW).instruction, Instruction::Noop);
    }
}
