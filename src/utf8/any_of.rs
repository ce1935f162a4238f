use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

const EMPTY_CHARS: &str = "chars must not be empty";

/// Parser that consumes the longest leading run of chars drawn from a set
///
/// At least one char must match; the run may extend to the end of input.
///
/// ```
/// use scancomb::{Parser, any_of};
///
/// let hex = any_of("1234567890ABCDEF");
/// assert_eq!(hex.parse_str("DEADBEEF and the rest").unwrap(), ("DEADBEEF", " and the rest"));
/// ```
pub struct AnyOf {
    chars: Cow<'static, str>,
}

impl AnyOf {
    const NAME: &'static str = "AnyOf";

    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for AnyOf {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.chars, EMPTY_CHARS)?;
        let text = input::text(Self::NAME, input)?;

        let end = input::run_end(text, |ch| self.chars.contains(ch)).unwrap_or(text.len());
        if end == 0 {
            return Err(ParseError::no_match(
                Self::NAME,
                format!("no match for any char in ({}) found in input", self.chars),
            ));
        }

        Ok(text.split_at(end))
    }
}

/// Convenience function to create an AnyOf parser
pub fn any_of(chars: impl Into<Cow<'static, str>>) -> AnyOf {
    AnyOf::new(chars)
}

/// Parser that consumes the longest leading run of chars absent from a set
pub struct NotAnyOf {
    chars: Cow<'static, str>,
}

impl NotAnyOf {
    const NAME: &'static str = "NotAnyOf";

    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for NotAnyOf {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.chars, EMPTY_CHARS)?;
        let text = input::text(Self::NAME, input)?;

        let end = input::run_end(text, |ch| !self.chars.contains(ch)).unwrap_or(text.len());
        if end == 0 {
            return Err(ParseError::no_match(
                Self::NAME,
                format!("match found for char in ({})", self.chars),
            ));
        }

        Ok(text.split_at(end))
    }
}

/// Convenience function to create a NotAnyOf parser
pub fn not_any_of(chars: impl Into<Cow<'static, str>>) -> NotAnyOf {
    NotAnyOf::new(chars)
}
