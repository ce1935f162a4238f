use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes chars for as long as a predicate holds
///
/// The predicate must turn false somewhere in the input: a run that swallows
/// the whole input is reported as an error, so callers always know the run
/// ended on a char they can inspect. A predicate that is false for the first
/// char yields an empty value and leaves the input untouched.
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> TakeWhile<F> {
    const NAME: &'static str = "TakeWhile";

    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let text = input::text(Self::NAME, input)?;

        match input::run_end(text, &self.predicate) {
            Some(end) => Ok(text.split_at(end)),
            None => Err(ParseError::no_match(
                Self::NAME,
                "predicate never returned false",
            )),
        }
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate)
}

/// Parser that consumes a predicate-true run of at least `lower` and at most
/// `upper` chars
///
/// Runs longer than `upper` are cut at `upper` chars. Unlike [`TakeWhile`] the
/// run may extend to the end of the input.
///
/// ```
/// use scancomb::{Parser, take_while_between};
///
/// let hex_pair = take_while_between(2, 2, |c: char| c.is_ascii_hexdigit());
/// assert_eq!(hex_pair.parse_str("2F14DF").unwrap(), ("2F", "14DF"));
/// ```
pub struct TakeWhileBetween<F> {
    lower: usize,
    upper: usize,
    predicate: F,
}

impl<F> TakeWhileBetween<F> {
    const NAME: &'static str = "TakeWhileBetween";

    pub fn new(lower: usize, upper: usize, predicate: F) -> Self {
        Self {
            lower,
            upper,
            predicate,
        }
    }
}

impl<'code, F> Parser<'code> for TakeWhileBetween<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        if self.lower > self.upper {
            return Err(ParseError::config(
                Self::NAME,
                format!(
                    "invalid range, lower ({}) must be <= upper ({})",
                    self.lower, self.upper
                ),
            ));
        }

        let text = input::text(Self::NAME, input)?;

        let mut matched = 0;
        let mut end = 0;
        for (pos, ch) in text.char_indices() {
            if matched == self.upper || !(self.predicate)(ch) {
                break;
            }
            matched += 1;
            end = pos + ch.len_utf8();
        }

        if matched == 0 && !text.chars().any(&self.predicate) {
            return Err(ParseError::no_match(
                Self::NAME,
                "predicate never returned true",
            ));
        }

        let (value, remainder) = text.split_at(end);
        if matched < self.lower {
            return Err(ParseError::boundary(
                Self::NAME,
                format!(
                    "predicate matched only {} chars ({}), below lower limit ({})",
                    matched, value, self.lower
                ),
            ));
        }

        Ok((value, remainder))
    }
}

/// Convenience function to create a TakeWhileBetween parser
pub fn take_while_between<F>(lower: usize, upper: usize, predicate: F) -> TakeWhileBetween<F>
where
    F: Fn(char) -> bool,
{
    TakeWhileBetween::new(lower, upper, predicate)
}
