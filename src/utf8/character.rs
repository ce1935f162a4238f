use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a specific character
pub struct Char {
    expected: char,
}

impl Char {
    const NAME: &'static str = "Char";

    pub fn new(expected: char) -> Self {
        Self { expected }
    }
}

impl<'code> Parser<'code> for Char {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let text = input::text(Self::NAME, input)?;

        match text.chars().next() {
            Some(ch) if ch == self.expected => Ok(text.split_at(ch.len_utf8())),
            _ => Err(ParseError::no_match(
                Self::NAME,
                format!("requested char ({}) not found in input", self.expected),
            )),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn char(expected: char) -> Char {
    Char::new(expected)
}
