use crate::error::ParseError;
use crate::input;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes a fixed number of UTF-8 chars
pub struct Take {
    n: usize,
}

impl Take {
    const NAME: &'static str = "Take";

    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<'code> Parser<'code> for Take {
    type Output = &'code str;

    fn parse(&self, input: &'code [u8]) -> ParseResult<'code, Self::Output> {
        if self.n == 0 {
            return Err(ParseError::config(
                Self::NAME,
                format!("n must be a non-zero positive integer, got {}", self.n),
            ));
        }

        let text = input::text_or(Self::NAME, input, "cannot take from empty input")?;

        let mut seen = 0;
        for (pos, ch) in text.char_indices() {
            seen += 1;
            if seen == self.n {
                // Include the whole of the nth char, however many bytes it spans
                return Ok(text.split_at(pos + ch.len_utf8()));
            }
        }

        Err(ParseError::boundary(
            Self::NAME,
            format!(
                "requested n ({}) chars but input had only {} utf-8 chars",
                self.n, seen
            ),
        ))
    }
}

/// Convenience function to create a Take parser
pub fn take(n: usize) -> Take {
    Take::new(n)
}
