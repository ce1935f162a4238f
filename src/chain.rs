use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs parsers one after another, feeding each the
/// remainder left by the previous one
///
/// Values are collected in order. The first failure stops the chain and is
/// returned wrapped, nothing parsed up to that point is kept.
pub struct Chain<P> {
    parsers: Vec<P>,
}

impl<P> Chain<P> {
    const NAME: &'static str = "Chain";

    pub fn new(parsers: impl IntoIterator<Item = P>) -> Self {
        Chain {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code, P> Parser<'code> for Chain<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        if self.parsers.is_empty() {
            return Err(ParseError::config(Self::NAME, "at least one parser is required"));
        }

        let mut values = Vec::with_capacity(self.parsers.len());
        let mut rest = input;
        let mut remainder = "";

        for (index, parser) in self.parsers.iter().enumerate() {
            let (value, next) = parser.parse(rest).map_err(|error| {
                tracing::trace!(operation = Self::NAME, index, %error, "step failed");
                ParseError::wrap(Self::NAME, "sub parser failed", error)
            })?;

            values.push(value);
            remainder = next;
            rest = next.as_bytes();
        }

        Ok((values, remainder))
    }
}

/// Convenience function to create a Chain parser
///
/// ```
/// use scancomb::{Parser, chain, take};
///
/// let pairs = chain([take(2), take(2), take(2)]);
/// let (values, rest) = pairs.parse_str("a1b2c3d4").unwrap();
/// assert_eq!(values, vec!["a1", "b2", "c3"]);
/// assert_eq!(rest, "d4");
/// ```
pub fn chain<'code, P>(parsers: impl IntoIterator<Item = P>) -> Chain<P>
where
    P: Parser<'code>,
{
    Chain::new(parsers)
}

/// Builds a [`Chain`] from parsers of different types by boxing each one
#[macro_export]
macro_rules! chain {
    ($($parser:expr),+ $(,)?) => {
        $crate::chain::Chain::new(::std::vec![$($crate::parser::BoxedExt::boxed($parser)),+])
    };
}
