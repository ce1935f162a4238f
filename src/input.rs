//! Checks shared by every text primitive.
//!
//! All primitives run the same guard before scanning: empty input is rejected
//! first, then the bytes are validated as UTF-8. Each primitive passes its own
//! operation name so failures keep a per-primitive message prefix.

use crate::error::ParseError;

const EMPTY_INPUT: &str = "input text is empty";

/// Rejects empty or ill-formed input, otherwise returns it as text
pub(crate) fn text<'code>(
    operation: &'static str,
    input: &'code [u8],
) -> Result<&'code str, ParseError> {
    text_or(operation, input, EMPTY_INPUT)
}

/// Same as [`text`] with a custom empty-input message
pub(crate) fn text_or<'code>(
    operation: &'static str,
    input: &'code [u8],
    empty_detail: &'static str,
) -> Result<&'code str, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput {
            operation,
            detail: empty_detail,
        });
    }
    std::str::from_utf8(input).map_err(|source| ParseError::InvalidEncoding { operation, source })
}

/// Fails with a configuration error when `value` is empty
pub(crate) fn require(
    operation: &'static str,
    value: &str,
    detail: &'static str,
) -> Result<(), ParseError> {
    if value.is_empty() {
        Err(ParseError::config(operation, detail))
    } else {
        Ok(())
    }
}

/// Splits the first char off `text`, keeping it as a slice of the input
pub(crate) fn split_first(text: &str) -> (&str, &str) {
    let width = text.chars().next().map_or(0, char::len_utf8);
    text.split_at(width)
}

/// Byte offset of the first char for which `keep` is false.
///
/// Returns `None` when `keep` holds for every char of `text`.
pub(crate) fn run_end(text: &str, mut keep: impl FnMut(char) -> bool) -> Option<usize> {
    text.char_indices()
        .find(|&(_, ch)| !keep(ch))
        .map(|(pos, _)| pos)
}
