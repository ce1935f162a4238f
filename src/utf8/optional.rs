use crate::input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes a string if it is present at the start of input
///
/// Absence is not an error: the value is then empty and the whole input is
/// the remainder. Empty or ill-formed input still fails.
///
/// ```
/// use scancomb::{Parser, optional};
///
/// let v = optional("v");
/// assert_eq!(v.parse_str("v1.2.3").unwrap(), ("v", "1.2.3"));
/// assert_eq!(v.parse_str("12.6.7-rc.2").unwrap(), ("", "12.6.7-rc.2"));
/// ```
pub struct Optional {
    expected: Cow<'static, str>,
}

impl Optional {
    const NAME: &'static str = "Optional";

    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Optional {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.expected, "match must not be empty")?;
        let text = input::text(Self::NAME, input)?;

        if text.starts_with(&*self.expected) {
            Ok(text.split_at(self.expected.len()))
        } else {
            Ok(text.split_at(0))
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional(expected: impl Into<Cow<'static, str>>) -> Optional {
    Optional::new(expected)
}
