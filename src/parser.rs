use crate::error::ParseError;

/// Outcome of running a parser: the parsed value and the unconsumed remainder
/// of the input, or the reason the parse failed.
///
/// The remainder is always a suffix of the original input, never a copy.
pub type ParseResult<'code, T> = Result<(T, &'code str), ParseError>;

/// Core parser trait for parser combinators
///
/// Parsers receive raw bytes because input is not trusted to be UTF-8; every
/// text primitive validates it before scanning. Parsers hold no mutable state,
/// so a single parser may be invoked any number of times, from any thread.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// Returns the parsed value and the remaining input on success. Failures
    /// never consume input.
    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output>;

    /// Convenience for input already known to be text
    fn parse_str(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(input.as_bytes())
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Type-erased text parser, used to put parsers of different types into one
/// [`first_of`](crate::first_of()) or [`chain`](crate::chain()) list
///
/// The bound is higher-ranked over the input lifetime, so a list of boxed
/// parsers is built once and then run against any number of inputs.
pub type BoxedParser = Box<dyn for<'code> Parser<'code, Output = &'code str> + Send + Sync>;

/// Type-erased parser whose output does not borrow from the input, such as a
/// [`Map`](crate::Map) producing a number
pub type BoxedValueParser<T> = Box<dyn for<'code> Parser<'code, Output = T> + Send + Sync>;

/// Extension trait to add .boxed() and .boxed_value() method support for parsers
pub trait BoxedExt: Sized {
    fn boxed(self) -> BoxedParser
    where
        Self: for<'code> Parser<'code, Output = &'code str> + Send + Sync + 'static,
    {
        Box::new(self)
    }

    fn boxed_value<T>(self) -> BoxedValueParser<T>
    where
        Self: for<'code> Parser<'code, Output = T> + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: for<'code> Parser<'code> {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(&'code [u8]) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        (self.function)(input)
    }
}

/// Turns a function with the parser signature into a [`Parser`] whose value
/// is owned
///
/// ```
/// use scancomb::{MapExt, Parser, from_fn, take};
///
/// let first_two = from_fn(|input| take(2).map(|pair: &str| pair.parse::<u8>()).parse(input));
/// assert_eq!(first_two.parse_str("42abc").unwrap(), (42, "abc"));
/// ```
pub fn from_fn<F, T>(function: F) -> FromFn<F>
where
    F: for<'code> Fn(&'code [u8]) -> ParseResult<'code, T>,
{
    FromFn { function }
}

/// Turns a function with the parser signature into a [`Parser`] whose value
/// is a slice of the input
///
/// ```
/// use scancomb::{Parser, from_text_fn, take};
///
/// let first_two = from_text_fn(|input| take(2).parse(input));
/// for line in ["abc", "xyz"] {
///     let owned = line.to_string();
///     assert_eq!(first_two.parse_str(&owned).unwrap().0, &line[..2]);
/// }
/// ```
pub fn from_text_fn<F>(function: F) -> FromFn<F>
where
    F: for<'code> Fn(&'code [u8]) -> ParseResult<'code, &'code str>,
{
    FromFn { function }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::utf8::{char, exact, take};

    #[test]
    fn test_parse_str_forwards_bytes() {
        let parser = take(3);
        assert_eq!(parser.parse_str("hello").unwrap(), ("hel", "lo"));
        assert_eq!(parser.parse(b"hello").unwrap(), ("hel", "lo"));
    }

    #[test]
    fn test_reference_is_parser() {
        let parser = exact("ab");
        let by_ref = &parser;
        assert_eq!(by_ref.parse_str("abc").unwrap(), ("ab", "c"));
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let parsers: Vec<BoxedParser> =
            vec![take(1).boxed(), char('b').boxed(), exact("cd").boxed()];

        let mut rest = "abcd";
        let mut values = Vec::new();
        for parser in &parsers {
            let (value, remainder) = parser.parse_str(rest).unwrap();
            values.push(value);
            rest = remainder;
        }
        assert_eq!(values, vec!["a", "b", "cd"]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_from_fn() {
        let hash_then_two = from_text_fn(|input| {
            let (_, rest) = char('#').parse(input)?;
            take(2).parse_str(rest)
        });

        assert_eq!(hash_then_two.parse_str("#2F14DF").unwrap(), ("2F", "14DF"));

        let error = hash_then_two.parse_str("2F14DF").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NoMatch);
        assert_eq!(error.to_string(), "Char: requested char (#) not found in input");
    }
}
