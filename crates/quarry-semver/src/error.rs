//! Parse error reporting.

use thiserror::Error;

/// Error raised when a version or version range string cannot be parsed.
///
/// Carries the 0-based byte offset of the failure within the original
/// input and a message describing what was expected there. The message is
/// written to be shown to an end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at offset {offset}: {message}")]
pub struct ParseError {
    message: String,
    input: String,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, input: impl Into<String>, offset: usize) -> Self {
        ParseError {
            message: message.into(),
            input: input.into(),
            offset,
        }
    }

    /// The 0-based byte offset at which parsing failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The message describing what was expected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Renders the message together with the input and a caret marking
    /// the failing offset.
    pub fn annotated(&self) -> String {
        format!(
            "{}\n{}\n{:>width$}",
            self.message,
            self.input,
            '^',
            width = self.offset + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = ParseError::new("expected '.', found end of input", "1.2", 3);
        assert_eq!(err.offset(), 3);
        assert_eq!(err.message(), "expected '.', found end of input");
        assert_eq!(err.input(), "1.2");
        assert_eq!(
            err.to_string(),
            "parse error at offset 3: expected '.', found end of input"
        );
    }

    #[test]
    fn test_annotated() {
        let err = ParseError::new("numeric identifier expected", "1.x.3", 2);
        assert_eq!(err.annotated(), "numeric identifier expected\n1.x.3\n  ^");

        let err = ParseError::new("numeric identifier expected", "x", 0);
        assert_eq!(err.annotated(), "numeric identifier expected\nx\n^");
    }
}
