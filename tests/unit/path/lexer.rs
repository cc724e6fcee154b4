use super::*;

fn numbers(src: &str) -> Vec<f64> {
    Lexer::new(src)
        .map(|t| match t.unwrap() {
            Token::Number { value, .. } => value,
            Token::Command { letter, .. } => panic!("unexpected command {letter}"),
        })
        .collect()
}

#[test]
fn signs_split_adjacent_numbers() {
    assert_eq!(numbers("4.12-0.62"), vec![4.12, -0.62]);
    assert_eq!(numbers("1-2+3"), vec![1.0, -2.0, 3.0]);
}

#[test]
fn second_decimal_point_starts_a_new_number() {
    assert_eq!(numbers("0.5.5"), vec![0.5, 0.5]);
    assert_eq!(numbers(".25,.75"), vec![0.25, 0.75]);
}

#[test]
fn exponents_are_read() {
    assert_eq!(numbers("1e2 -2.5E-1"), vec![100.0, -0.25]);
}

#[test]
fn separators_are_whitespace_and_commas() {
    assert_eq!(numbers(" 1,\t2\n,3 "), vec![1.0, 2.0, 3.0]);
}

#[test]
fn commands_carry_offsets() {
    let tokens: Vec<_> = Lexer::new("M1 c2").map(Result::unwrap).collect();
    assert_eq!(
        tokens,
        vec![
            Token::Command {
                letter: 'M',
                offset: 0
            },
            Token::Number {
                value: 1.0,
                offset: 1
            },
            Token::Command {
                letter: 'c',
                offset: 3
            },
            Token::Number {
                value: 2.0,
                offset: 4
            },
        ]
    );
}

#[test]
fn malformed_numbers_point_at_their_start() {
    let err = Lexer::new("1 - 2").nth(1).unwrap().unwrap_err();
    assert_eq!(err, ParseError::MalformedNumber { offset: 2 });

    let err = Lexer::new(" .").next().unwrap().unwrap_err();
    assert_eq!(err, ParseError::MalformedNumber { offset: 1 });

    let err = Lexer::new("3e").next().unwrap().unwrap_err();
    assert_eq!(err, ParseError::MalformedNumber { offset: 0 });

    let err = Lexer::new("1e999").next().unwrap().unwrap_err();
    assert_eq!(err, ParseError::MalformedNumber { offset: 0 });
}

#[test]
fn stray_characters_are_unknown_commands() {
    let mut lexer = Lexer::new("1 # 2");
    assert!(lexer.next().unwrap().is_ok());
    assert_eq!(
        lexer.next().unwrap().unwrap_err(),
        ParseError::UnknownCommand {
            letter: '#',
            offset: 2
        }
    );
    assert!(lexer.next().is_none());
}
