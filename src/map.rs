use crate::error::{BoxError, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a fallible
/// mapping function
///
/// Both a failure of the inner parser and a failure of the mapping function
/// are reported as `Map` errors, with the original failure kept as the source.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    const NAME: &'static str = "Map";

    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U, E> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Output = U;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        let (value, remainder) = self
            .parser
            .parse(input)
            .map_err(|error| ParseError::wrap(Self::NAME, "parser returned error", error))?;

        let mapped = (self.mapper)(value).map_err(|error| ParseError::Mapping {
            operation: Self::NAME,
            context: "fn returned error",
            source: error.into(),
        })?;

        Ok((mapped, remainder))
    }
}

/// Convenience function to create a Map parser
///
/// ```
/// use scancomb::{Parser, map, take};
///
/// let number = map(take(2), |digits: &str| digits.parse::<u32>());
/// let (value, rest) = number.parse_str("27 <- this is a number").unwrap();
/// assert_eq!(value, 27);
/// assert_eq!(rest, " <- this is a number");
/// ```
pub fn map<'code, P, F, U, E>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<BoxError>,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U, E>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<BoxError>,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
