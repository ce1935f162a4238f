use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

const EMPTY_MATCH: &str = "match must not be empty";
const EMPTY_INPUT: &str = "cannot match on empty input";

fn not_found(operation: &'static str, expected: &str) -> ParseError {
    ParseError::no_match(operation, format!("match ({}) not in input", expected))
}

/// Parser that matches an exact, case-sensitive string at the start of input
pub struct Exact {
    expected: Cow<'static, str>,
}

impl Exact {
    const NAME: &'static str = "Exact";

    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Exact {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.expected, EMPTY_MATCH)?;
        let text = input::text_or(Self::NAME, input, EMPTY_INPUT)?;

        if text.starts_with(&*self.expected) {
            Ok(text.split_at(self.expected.len()))
        } else {
            Err(not_found(Self::NAME, &self.expected))
        }
    }
}

/// Convenience function to create an Exact parser
pub fn exact(expected: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(expected)
}

/// Parser that matches a string at the start of input, ignoring case
///
/// The value is the input's own slice, so it keeps the input's casing rather
/// than the casing of the expected string.
///
/// ```
/// use scancomb::{Parser, exact_case_insensitive};
///
/// let parser = exact_case_insensitive("GEnErAl KeNobI!");
/// let (value, rest) = parser.parse_str("GENERAL KENOBI! YOU ARE A BOLD ONE.").unwrap();
/// assert_eq!(value, "GENERAL KENOBI!");
/// assert_eq!(rest, " YOU ARE A BOLD ONE.");
/// ```
pub struct ExactCaseInsensitive {
    expected: Cow<'static, str>,
}

impl ExactCaseInsensitive {
    const NAME: &'static str = "ExactCaseInsensitive";

    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Byte length of the input prefix that case-insensitively equals the
    /// expected string, compared char by char
    fn folded_prefix_len(&self, text: &str) -> Option<usize> {
        let mut chars = text.char_indices();
        let mut end = 0;
        for expected in self.expected.chars() {
            let (pos, ch) = chars.next()?;
            if !eq_ignore_case(ch, expected) {
                return None;
            }
            end = pos + ch.len_utf8();
        }
        Some(end)
    }
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

impl<'code> Parser<'code> for ExactCaseInsensitive {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        input::require(Self::NAME, &self.expected, EMPTY_MATCH)?;
        let text = input::text_or(Self::NAME, input, EMPTY_INPUT)?;

        // A match with more chars than the input can never be found
        let wanted = self.expected.chars().count();
        if text.chars().take(wanted).count() < wanted {
            return Err(not_found(Self::NAME, &self.expected));
        }

        match self.folded_prefix_len(text) {
            Some(end) => Ok(text.split_at(end)),
            None => Err(not_found(Self::NAME, &self.expected)),
        }
    }
}

/// Convenience function to create an ExactCaseInsensitive parser
pub fn exact_case_insensitive(expected: impl Into<Cow<'static, str>>) -> ExactCaseInsensitive {
    ExactCaseInsensitive::new(expected)
}
