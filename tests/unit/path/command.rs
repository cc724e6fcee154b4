use super::*;

fn commands(src: &str) -> Vec<PathCommand> {
    read_commands(src)
        .unwrap()
        .into_iter()
        .map(|l| l.command)
        .collect()
}

#[test]
fn relative_curve_resolves_against_current_point() {
    let cmd = PathCommand::CurveTo {
        c1: Point::new(1.0, 1.0),
        c2: Point::new(2.0, 3.0),
        to: Point::new(4.0, -1.0),
        relative: true,
    };
    let abs = cmd.resolve(Point::new(10.0, 20.0));
    assert_eq!(
        abs,
        PathCommand::CurveTo {
            c1: Point::new(11.0, 21.0),
            c2: Point::new(12.0, 23.0),
            to: Point::new(14.0, 19.0),
            relative: false,
        }
    );
    assert!(!abs.is_relative());
    assert_eq!(abs.end_point(), Point::new(14.0, 19.0));
}

#[test]
fn absolute_commands_ignore_current_point() {
    let cmd = PathCommand::MoveTo {
        to: Point::new(3.0, 4.0),
        relative: false,
    };
    assert_eq!(cmd.resolve(Point::new(100.0, 100.0)), cmd);
}

#[test]
fn implicit_repetition_yields_one_command_per_sextuple() {
    let cmds = commands("M0,0 C1,1 2,2 3,3 4,4 5,5 6,6");
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[0], PathCommand::MoveTo { .. }));
    assert!(
        cmds[1..]
            .iter()
            .all(|c| matches!(c, PathCommand::CurveTo { .. }))
    );
    assert_eq!(cmds[2].end_point(), Point::new(6.0, 6.0));
}

#[test]
fn repeated_groups_are_located_at_their_first_number() {
    let located = read_commands("M0,0c1,1,1,1,1,1 2,2,2,2,2,2").unwrap();
    assert_eq!(located[1].offset, 5);
    assert_eq!(located[2].offset, 17);
}

#[test]
fn arity_is_checked_per_command() {
    assert_eq!(
        read_commands("M1").unwrap_err(),
        ParseError::WrongArity {
            command: 'M',
            offset: 0
        }
    );
    assert_eq!(
        read_commands("M1,2 c1,2,3,4,5").unwrap_err(),
        ParseError::WrongArity {
            command: 'c',
            offset: 5
        }
    );
    assert_eq!(
        read_commands("M1,2C").unwrap_err(),
        ParseError::WrongArity {
            command: 'C',
            offset: 4
        }
    );
}

#[test]
fn malformed_number_wins_over_arity() {
    assert_eq!(
        read_commands("M1,2 c1,2,3,4,5,-").unwrap_err(),
        ParseError::MalformedNumber { offset: 16 }
    );
}

#[test]
fn move_to_must_come_first() {
    assert_eq!(
        read_commands("M1,2 c1,2,3,4,5,6 M0,0").unwrap_err(),
        ParseError::MisplacedMoveTo { offset: 18 }
    );
    assert_eq!(
        read_commands("C1,2,3,4,5,6").unwrap_err(),
        ParseError::MissingMoveTo { offset: 0 }
    );
    assert_eq!(
        read_commands(" 7 M1,2").unwrap_err(),
        ParseError::MissingMoveTo { offset: 1 }
    );
}

#[test]
fn letters_outside_the_subset_are_rejected() {
    assert_eq!(
        read_commands("M1,2 L3,4").unwrap_err(),
        ParseError::UnknownCommand {
            letter: 'L',
            offset: 5
        }
    );
    assert_eq!(
        read_commands("M1,2 s1,2,3,4").unwrap_err(),
        ParseError::UnknownCommand {
            letter: 's',
            offset: 5
        }
    );
}

#[test]
fn separator_only_input_is_empty() {
    assert_eq!(read_commands("").unwrap_err(), ParseError::EmptyPath);
    assert_eq!(read_commands(" \t\n, ").unwrap_err(), ParseError::EmptyPath);
}
