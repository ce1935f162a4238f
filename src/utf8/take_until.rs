use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes chars until a predicate returns true
///
/// The char the predicate accepts is left at the start of the remainder. If
/// the predicate never returns true the parse fails rather than consuming the
/// whole input.
pub struct TakeUntil<F> {
    predicate: F,
}

impl<F> TakeUntil<F> {
    const NAME: &'static str = "TakeUntil";

    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeUntil<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let text = input::text(Self::NAME, input)?;

        match input::run_end(text, |ch| !(self.predicate)(ch)) {
            Some(end) => Ok(text.split_at(end)),
            None => Err(ParseError::no_match(
                Self::NAME,
                "predicate never returned true",
            )),
        }
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<F>(predicate: F) -> TakeUntil<F>
where
    F: Fn(char) -> bool,
{
    TakeUntil::new(predicate)
}

/// Parser that consumes everything up to the first occurrence of a string
pub struct TakeTo {
    delimiter: Cow<'static, str>,
}

impl TakeTo {
    const NAME: &'static str = "TakeTo";

    pub fn new(delimiter: impl Into<Cow<'static, str>>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

impl<'code> Parser<'code> for TakeTo {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.delimiter, "match must not be empty")?;
        let text = input::text(Self::NAME, input)?;

        match text.find(&*self.delimiter) {
            Some(start) => Ok(text.split_at(start)),
            None => Err(ParseError::no_match(
                Self::NAME,
                format!("match ({}) not in input", self.delimiter),
            )),
        }
    }
}

/// Convenience function to create a TakeTo parser
pub fn take_to(delimiter: impl Into<Cow<'static, str>>) -> TakeTo {
    TakeTo::new(delimiter)
}
