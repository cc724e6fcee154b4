use crate::{
    foundation::core::Point,
    foundation::error::ParseError,
    path::lexer::{Lexer, Token},
};

/// One drawing command of a path-data string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum PathCommand {
    /// `M` / `m`: set the current point without drawing.
    MoveTo {
        /// Target point.
        to: Point,
        /// Coordinates are offsets from the current point.
        relative: bool,
    },
    /// `C` / `c`: cubic Bézier from the current point.
    CurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        to: Point,
        /// Coordinates are offsets from the current point.
        relative: bool,
    },
}

impl PathCommand {
    /// Whether the coordinates are offsets from the current point.
    pub fn is_relative(&self) -> bool {
        match *self {
            Self::MoveTo { relative, .. } | Self::CurveTo { relative, .. } => relative,
        }
    }

    /// Absolute form of this command when evaluated at `current`.
    pub fn resolve(self, current: Point) -> Self {
        if !self.is_relative() {
            return self;
        }
        let off = current.to_vec2();
        match self {
            Self::MoveTo { to, .. } => Self::MoveTo {
                to: to + off,
                relative: false,
            },
            Self::CurveTo { c1, c2, to, .. } => Self::CurveTo {
                c1: c1 + off,
                c2: c2 + off,
                to: to + off,
                relative: false,
            },
        }
    }

    /// Point the command leaves the pen at, in the command's own coordinates.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { to, .. } | Self::CurveTo { to, .. } => to,
        }
    }
}

/// A command together with the byte offset it was read from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Located {
    pub(crate) offset: usize,
    pub(crate) command: PathCommand,
}

const MOVE_ARITY: usize = 2;
const CURVE_ARITY: usize = 6;

/// Read the command list of one path-data string.
///
/// The result starts with exactly one move-to. A curve letter followed by several sextuples
/// yields one command per sextuple, each located at its first number.
pub(crate) fn read_commands(src: &str) -> Result<Vec<Located>, ParseError> {
    let mut lexer = Lexer::new(src).peekable();
    let mut out: Vec<Located> = Vec::new();

    while let Some(token) = lexer.next() {
        let (letter, offset) = match token? {
            Token::Command { letter, offset } => (letter, offset),
            Token::Number { offset, .. } => return Err(ParseError::MissingMoveTo { offset }),
        };

        let mut args: Vec<(f64, usize)> = Vec::new();
        while let Some(Ok(Token::Number { value, offset })) = lexer.peek() {
            args.push((*value, *offset));
            lexer.next();
        }
        if let Some(Err(err)) = lexer.peek() {
            return Err(*err);
        }

        let relative = letter.is_ascii_lowercase();
        match letter {
            'M' | 'm' => {
                if !out.is_empty() {
                    return Err(ParseError::MisplacedMoveTo { offset });
                }
                if args.len() != MOVE_ARITY {
                    return Err(ParseError::WrongArity {
                        command: letter,
                        offset,
                    });
                }
                out.push(Located {
                    offset,
                    command: PathCommand::MoveTo {
                        to: Point::new(args[0].0, args[1].0),
                        relative,
                    },
                });
            }
            'C' | 'c' => {
                if out.is_empty() {
                    return Err(ParseError::MissingMoveTo { offset });
                }
                if args.is_empty() || args.len() % CURVE_ARITY != 0 {
                    return Err(ParseError::WrongArity {
                        command: letter,
                        offset,
                    });
                }
                for group in args.chunks_exact(CURVE_ARITY) {
                    out.push(Located {
                        offset: group[0].1,
                        command: PathCommand::CurveTo {
                            c1: Point::new(group[0].0, group[1].0),
                            c2: Point::new(group[2].0, group[3].0),
                            to: Point::new(group[4].0, group[5].0),
                            relative,
                        },
                    });
                }
            }
            _ => return Err(ParseError::UnknownCommand { letter, offset }),
        }
    }

    if out.is_empty() {
        return Err(ParseError::EmptyPath);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
