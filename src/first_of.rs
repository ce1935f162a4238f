use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries each parser in order against the same input
/// and returns the first success
///
/// Order matters: an earlier parser wins even when a later one would consume
/// more input. When every parser fails the individual failures are dropped
/// and a single `Try: all parsers failed` error is returned.
pub struct Try<P> {
    parsers: Vec<P>,
}

impl<P> Try<P> {
    const NAME: &'static str = "Try";

    pub fn new(parsers: impl IntoIterator<Item = P>) -> Self {
        Try {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code, P> Parser<'code> for Try<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        if self.parsers.is_empty() {
            return Err(ParseError::config(Self::NAME, "at least one parser is required"));
        }

        for (index, parser) in self.parsers.iter().enumerate() {
            match parser.parse(input) {
                Ok(result) => return Ok(result),
                Err(error) => {
                    tracing::trace!(operation = Self::NAME, index, %error, "alternative rejected");
                }
            }
        }

        let attempts = self.parsers.len();
        tracing::trace!(operation = Self::NAME, attempts, "all alternatives rejected");
        Err(ParseError::Exhausted {
            operation: Self::NAME,
            attempts,
        })
    }
}

/// Convenience function to create a Try parser
///
/// ```
/// use scancomb::{BoxedExt, Parser, char, exact_case_insensitive, first_of, one_of};
///
/// let parser = first_of(vec![
///     one_of("abc").boxed(),
///     char('本').boxed(),
///     exact_case_insensitive("XyZ").boxed(),
/// ]);
/// assert_eq!(parser.parse_str("xyzabc日ð本Ê語").unwrap(), ("xyz", "abc日ð本Ê語"));
/// ```
pub fn first_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> Try<P>
where
    P: Parser<'code>,
{
    Try::new(parsers)
}

/// Builds a [`Try`] from parsers of different types by boxing each one
///
/// ```
/// use scancomb::{Parser, char, first_of, take};
///
/// let parser = first_of![take(2), char('h')];
/// assert_eq!(parser.parse_str("hello").unwrap(), ("he", "llo"));
/// ```
#[macro_export]
macro_rules! first_of {
    ($($parser:expr),+ $(,)?) => {
        $crate::first_of::Try::new(::std::vec![$($crate::parser::BoxedExt::boxed($parser)),+])
    };
}
