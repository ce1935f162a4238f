use std::borrow::Cow;
use std::error::Error;
use std::str::Utf8Error;

/// Boxed error produced by user supplied mapping functions
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Coarse classification of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The parser itself was built with unusable arguments (empty match string,
    /// empty char set, zero count, inverted bounds)
    InvalidConfiguration,
    /// The parser was invoked on zero-length input
    EmptyInput,
    /// The input is not well-formed UTF-8
    InvalidEncoding,
    /// The matching condition was not satisfied
    NoMatch,
    /// Not enough input for a fixed-size consumption, or a run shorter than a
    /// required lower bound
    BoundaryExceeded,
    /// A combinator failure wrapping or aggregating other failures
    CompositeFailure,
}

/// Failure returned by every parser in this crate.
///
/// The rendered message always has the shape `"<Operation>: <detail>"`, where
/// the operation is the name of the parser that failed. Combinators prefix the
/// message of the failure they wrap with their own name, and expose the
/// wrapped failure through [`Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{operation}: {detail}")]
    InvalidConfiguration {
        operation: &'static str,
        detail: Cow<'static, str>,
    },

    #[error("{operation}: {detail}")]
    EmptyInput {
        operation: &'static str,
        detail: &'static str,
    },

    #[error("{operation}: input not valid utf-8")]
    InvalidEncoding {
        operation: &'static str,
        source: Utf8Error,
    },

    #[error("{operation}: {detail}")]
    NoMatch {
        operation: &'static str,
        detail: Cow<'static, str>,
    },

    #[error("{operation}: {detail}")]
    BoundaryExceeded {
        operation: &'static str,
        detail: Cow<'static, str>,
    },

    /// A sub-parser of a combinator failed
    #[error("{operation}: {context}: {source}")]
    Wrapped {
        operation: &'static str,
        context: &'static str,
        source: Box<ParseError>,
    },

    /// A mapping function rejected a successfully parsed value
    #[error("{operation}: {context}: {source}")]
    Mapping {
        operation: &'static str,
        context: &'static str,
        source: BoxError,
    },

    /// Every alternative failed; the individual failures are discarded
    ///
    /// The message stays fixed whatever the number of alternatives, so the
    /// count is only available through the field.
    #[error("{operation}: all parsers failed")]
    Exhausted {
        operation: &'static str,
        /// Number of alternatives that were run and rejected
        attempts: usize,
    },
}

impl ParseError {
    pub(crate) fn config(operation: &'static str, detail: impl Into<Cow<'static, str>>) -> Self {
        ParseError::InvalidConfiguration {
            operation,
            detail: detail.into(),
        }
    }

    pub(crate) fn no_match(operation: &'static str, detail: impl Into<Cow<'static, str>>) -> Self {
        ParseError::NoMatch {
            operation,
            detail: detail.into(),
        }
    }

    pub(crate) fn boundary(operation: &'static str, detail: impl Into<Cow<'static, str>>) -> Self {
        ParseError::BoundaryExceeded {
            operation,
            detail: detail.into(),
        }
    }

    pub(crate) fn wrap(operation: &'static str, context: &'static str, inner: ParseError) -> Self {
        ParseError::Wrapped {
            operation,
            context,
            source: Box::new(inner),
        }
    }

    /// The taxonomy bucket this failure belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            ParseError::EmptyInput { .. } => ErrorKind::EmptyInput,
            ParseError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            ParseError::NoMatch { .. } => ErrorKind::NoMatch,
            ParseError::BoundaryExceeded { .. } => ErrorKind::BoundaryExceeded,
            ParseError::Wrapped { .. } | ParseError::Mapping { .. } | ParseError::Exhausted { .. } => {
                ErrorKind::CompositeFailure
            }
        }
    }

    /// Name of the operation that produced this failure, e.g. `"Take"`
    pub fn operation(&self) -> &'static str {
        match self {
            ParseError::InvalidConfiguration { operation, .. }
            | ParseError::EmptyInput { operation, .. }
            | ParseError::InvalidEncoding { operation, .. }
            | ParseError::NoMatch { operation, .. }
            | ParseError::BoundaryExceeded { operation, .. }
            | ParseError::Wrapped { operation, .. }
            | ParseError::Mapping { operation, .. }
            | ParseError::Exhausted { operation, .. } => operation,
        }
    }

    /// Follows the chain of wrapped failures down to the innermost parser error.
    ///
    /// For a primitive failure this is the error itself.
    pub fn root_cause(&self) -> &ParseError {
        let mut current = self;
        while let ParseError::Wrapped { source, .. } = current {
            current = source;
        }
        current
    }
}
