//! Error types for URI decomposition.

use std::fmt;

/// Error returned when a URI reference cannot be decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Both kinds are non-retryable: no partial record is ever produced, so
/// there is nothing to roll back. Out-of-range or non-numeric ports are
/// never an error; they are silently normalized to absent instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input failed RFC 3986 `URI-reference` grammar validation
    Malformed,
    /// Input passed validation but the splitter could not locate the
    /// generic `scheme://authority` shape; guards against a gap between
    /// the grammar and the splitter's assumptions
    Unparsable,
}

impl ParseError {
    /// Creates an error for input rejected by the grammar validator.
    #[must_use]
    pub fn malformed(input: &str) -> Self {
        Self {
            input: input.to_string(),
            kind: ParseErrorKind::Malformed,
        }
    }

    /// Creates an error for input the splitter could not decompose.
    #[must_use]
    pub fn unparsable(input: &str) -> Self {
        Self {
            input: input.to_string(),
            kind: ParseErrorKind::Unparsable,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Malformed => write!(
                f,
                "the submitted uri '{}' is incorrectly built semantically (RFC 3986)",
                self.input
            ),
            ParseErrorKind::Unparsable => {
                write!(f, "unable to parse uri '{}'", self.input)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_carries_input() {
        let err = ParseError::malformed("://broken");
        assert_eq!(err.kind, ParseErrorKind::Malformed);
        assert!(err.to_string().contains("://broken"));
    }

    #[test]
    fn unparsable_message_carries_input() {
        let err = ParseError::unparsable(":odd");
        assert_eq!(err.kind, ParseErrorKind::Unparsable);
        assert!(err.to_string().contains(":odd"));
    }
}
