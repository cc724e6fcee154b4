/// Convenience result type used across kanjistroke.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// One path-data string of a load could not be parsed.
    #[error("parse error in path {index}: {source}")]
    Parse {
        /// Position of the failing string in the loaded list.
        index: usize,
        /// What went wrong inside that string.
        source: ParseError,
    },

    /// The animator refused to start.
    #[error("animation error: {0}")]
    Animation(#[from] AnimationError),

    /// Invalid user-provided data outside of path strings (SVG documents, viewports).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Parse`] value.
    pub fn parse(index: usize, source: ParseError) -> Self {
        Self::Parse { index, source }
    }

    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Errors raised while parsing a single path-data string.
///
/// Offsets are byte offsets into the parsed string.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string is empty or only holds separators.
    #[error("path data is empty")]
    EmptyPath,

    /// A command letter (or any other character) outside `M`, `m`, `C`, `c`.
    #[error("unknown command '{letter}' at offset {offset}")]
    UnknownCommand {
        /// The offending character.
        letter: char,
        /// Where it starts.
        offset: usize,
    },

    /// A token that starts like a number but is not one (`-`, `.`, `1e`).
    #[error("malformed number at offset {offset}")]
    MalformedNumber {
        /// Where the token starts.
        offset: usize,
    },

    /// A command followed by the wrong count of numbers.
    #[error("wrong number of arguments for '{command}' at offset {offset}")]
    WrongArity {
        /// The command letter as written.
        command: char,
        /// Offset of the command letter.
        offset: usize,
    },

    /// A move-to that is not the first command of the path.
    #[error("move-to at offset {offset} is not the first command")]
    MisplacedMoveTo {
        /// Offset of the move-to letter.
        offset: usize,
    },

    /// The path does not open with a move-to.
    #[error("path must start with a move-to (found data at offset {offset})")]
    MissingMoveTo {
        /// Offset of the first token.
        offset: usize,
    },

    /// A move-to with no curve after it; a stroke needs at least one segment.
    #[error("no curve segments follow the move-to at offset {offset}")]
    NoSegments {
        /// Offset of the move-to letter.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Self::EmptyPath => None,
            Self::UnknownCommand { offset, .. }
            | Self::MalformedNumber { offset }
            | Self::WrongArity { offset, .. }
            | Self::MisplacedMoveTo { offset }
            | Self::MissingMoveTo { offset }
            | Self::NoSegments { offset } => Some(offset),
        }
    }
}

/// Errors raised when starting an animation.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationError {
    /// The stroke set holds no strokes.
    #[error("nothing to animate: stroke set is empty")]
    NothingToAnimate,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
