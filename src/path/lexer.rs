//! Tokenizer for path-data strings.
//!
//! Separators are ASCII whitespace and commas. A sign or a second decimal point ends the
//! current number and starts the next one, so `4.12-0.62` and `0.5.5` each read as two numbers.

use crate::foundation::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token {
    Command { letter: char, offset: usize },
    Number { value: f64, offset: usize },
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let malformed = ParseError::MalformedNumber { offset: start };

        if matches!(self.peek_byte(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek_byte() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            return Err(malformed);
        }
        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(malformed);
            }
        }

        let value: f64 = self.src[start..self.pos].parse().map_err(|_| malformed)?;
        if !value.is_finite() {
            return Err(malformed);
        }
        Ok(Token::Number {
            value,
            offset: start,
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_separators();
        let b = self.peek_byte()?;

        if b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.') {
            let token = self.number();
            if token.is_err() {
                // Stop after the first error.
                self.pos = self.src.len();
            }
            return Some(token);
        }

        let offset = self.pos;
        let letter = self.src[offset..].chars().next()?;
        self.pos += letter.len_utf8();
        if letter.is_ascii_alphabetic() {
            Some(Ok(Token::Command { letter, offset }))
        } else {
            self.pos = self.src.len();
            Some(Err(ParseError::UnknownCommand { letter, offset }))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/lexer.rs"]
mod tests;
