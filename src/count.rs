use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that applies the same parser exactly `n` times in a row
pub struct Count<P> {
    parser: P,
    n: usize,
}

impl<P> Count<P> {
    const NAME: &'static str = "Count";

    pub fn new(parser: P, n: usize) -> Self {
        Count { parser, n }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        if self.n == 0 {
            return Err(ParseError::config(
                Self::NAME,
                "n must be a non-zero positive integer, got 0",
            ));
        }

        let mut values = Vec::with_capacity(self.n);
        let mut rest = input;
        let mut remainder = "";

        for index in 0..self.n {
            let (value, next) = self.parser.parse(rest).map_err(|error| {
                tracing::trace!(operation = Self::NAME, index, %error, "repetition failed");
                ParseError::wrap(Self::NAME, "parser failed", error)
            })?;

            values.push(value);
            remainder = next;
            rest = next.as_bytes();
        }

        tracing::trace!(operation = Self::NAME, n = self.n, "all repetitions matched");
        Ok((values, remainder))
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(parser: P, n: usize) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(parser, n)
}

/// Extension trait to add .count() method support for parsers
pub trait CountExt<'code>: Parser<'code> + Sized {
    /// Repeat this parser exactly `n` times
    ///
    /// ```
    /// use scancomb::{CountExt, Parser, take};
    ///
    /// let (values, rest) = take(2).count(3).parse_str("123456").unwrap();
    /// assert_eq!(values, vec!["12", "34", "56"]);
    /// assert_eq!(rest, "");
    /// ```
    fn count(self, n: usize) -> Count<Self> {
        Count::new(self, n)
    }
}

/// Implement CountExt for all parsers
impl<'code, P> CountExt<'code> for P where P: Parser<'code> {}
