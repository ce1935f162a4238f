use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

const EMPTY_CHARS: &str = "chars must not be empty";

/// Parser that consumes a single char if it is one of a set of chars
pub struct OneOf {
    chars: Cow<'static, str>,
}

impl OneOf {
    const NAME: &'static str = "OneOf";

    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.chars, EMPTY_CHARS)?;
        let text = input::text(Self::NAME, input)?;

        match text.chars().next() {
            Some(ch) if self.chars.contains(ch) => Ok(text.split_at(ch.len_utf8())),
            _ => Err(ParseError::no_match(
                Self::NAME,
                format!("no requested char ({}) found in input", self.chars),
            )),
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of(chars: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(chars)
}

/// Parser that consumes a single char if it is not one of a set of chars
pub struct NoneOf {
    chars: Cow<'static, str>,
}

impl NoneOf {
    const NAME: &'static str = "NoneOf";

    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for NoneOf {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.chars, EMPTY_CHARS)?;
        let text = input::text(Self::NAME, input)?;

        let (leading, rest) = input::split_first(text);
        if leading.chars().any(|ch| self.chars.contains(ch)) {
            return Err(ParseError::no_match(
                Self::NAME,
                format!("found match ({}) in input", leading),
            ));
        }

        Ok((leading, rest))
    }
}

/// Convenience function to create a NoneOf parser
pub fn none_of(chars: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf::new(chars)
}
