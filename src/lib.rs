//! # ScanComb - UTF-8 Scanner Combinator Library
//!
//! Small text scanners that each consume a prefix of their input and hand back
//! the value they matched together with the untouched remainder. Scanners are
//! composed with combinators into larger parsers, and every failure is a value
//! describing which scanner failed and why.
//!
//! - **Zero panics**: degenerate configuration, empty input and ill-formed
//!   UTF-8 are all reported as [`ParseError`]s
//! - **Borrowed results**: values and remainders are slices of the input
//! - **Char aware**: counts and positions are in `char`s, never bytes
//!
//! ```
//! use scancomb::{CountExt, MapExt, ParseError, Parser, char, from_fn, take};
//!
//! #[derive(Debug, PartialEq)]
//! struct Rgb(u8, u8, u8);
//!
//! let colour = from_fn(|input| {
//!     let (_, rest) = char('#').parse(input)?;
//!     let channels = take(2).map(|pair: &str| u8::from_str_radix(pair, 16));
//!     let (rgb, rest) = channels.count(3).parse_str(rest)?;
//!     Ok::<_, ParseError>((Rgb(rgb[0], rgb[1], rgb[2]), rest))
//! });
//!
//! assert_eq!(colour.parse_str("#2F14DF").unwrap(), (Rgb(47, 20, 223), ""));
//!
//! let error = colour.parse_str("#2F14").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Count: parser failed: Map: parser returned error: Take: cannot take from empty input"
//! );
//! ```

pub mod chain;
pub mod count;
pub mod error;
pub mod first_of;
mod input;
pub mod map;
pub mod parser;
pub mod utf8;

#[cfg(test)]
mod properties;

pub use chain::{Chain, chain};
pub use count::{Count, CountExt, count};
pub use error::{BoxError, ErrorKind, ParseError};
pub use first_of::{Try, first_of};
pub use map::{Map, MapExt, map};
pub use parser::{
    BoxedExt, BoxedParser, BoxedValueParser, FromFn, ParseResult, Parser, from_fn, from_text_fn,
};
pub use utf8::{
    AnyOf, Char, Exact, ExactCaseInsensitive, NoneOf, NotAnyOf, OneOf, Optional, Take, TakeTo,
    TakeUntil, TakeWhile, TakeWhileBetween, any_of, char, exact, exact_case_insensitive, none_of,
    not_any_of, one_of, optional, take, take_to, take_until, take_while, take_while_between,
};
