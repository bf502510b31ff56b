//! Syntax errors.

use std::fmt;

use basic_diagnostic::{Diagnostic, ErrorKind};
use basic_ir::{SharedSource, Span};

use crate::TokenSet;

/// A hard parse failure at a token.
///
/// The parser stops at the first one; there is no recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        ParseError {
            span,
            message: message.into(),
        }
    }

    /// `Expected a, b or c` at `span`.
    #[cold]
    pub fn expected(expected: TokenSet, span: Span) -> Self {
        ParseError::new(span, format!("Expected {}", expected.describe()))
    }

    pub fn into_diagnostic(self, source: SharedSource) -> Diagnostic {
        Diagnostic::new(ErrorKind::InvalidSyntax, self.message, self.span, source)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
