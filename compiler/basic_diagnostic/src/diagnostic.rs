//! The rendered error type.

use std::fmt;

use basic_ir::{SharedSource, Span};

use crate::string_with_arrows;

/// Flat error taxonomy. There is no severity and no recovery: the first
/// error of any kind ends the run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    IllegalCharacter,
    ExpectedCharacter,
    InvalidSyntax,
    Runtime,
}

impl ErrorKind {
    /// Heading printed before the details.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::IllegalCharacter => "Illegal Character",
            ErrorKind::ExpectedCharacter => "Expected Character",
            ErrorKind::InvalidSyntax => "Invalid Syntax",
            ErrorKind::Runtime => "Runtime Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One traceback line: `File {source}, line {n}, in {display_name}`.
#[derive(Clone, Debug)]
pub struct TraceFrame {
    pub display_name: String,
    pub source: SharedSource,
    /// Where execution was inside this frame: the error site for the
    /// innermost frame, the call site for the others.
    pub span: Span,
}

impl TraceFrame {
    /// One-based line number of the frame's position.
    pub fn line(&self) -> usize {
        self.source.position_at(self.span.start).line + 1
    }
}

/// A finished, printable error.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    kind: ErrorKind,
    details: String,
    span: Span,
    source: SharedSource,
    /// Outermost frame first. Empty for lex and syntax errors.
    traceback: Vec<TraceFrame>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, details: impl Into<String>, span: Span, source: SharedSource) -> Self {
        Diagnostic {
            kind,
            details: details.into(),
            span,
            source,
            traceback: Vec::new(),
        }
    }

    /// Attach the call chain. Frames are given outermost first.
    #[must_use]
    pub fn with_traceback(mut self, frames: Vec<TraceFrame>) -> Self {
        self.traceback = frames;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn source(&self) -> &SharedSource {
        &self.source
    }

    pub fn traceback(&self) -> &[TraceFrame] {
        &self.traceback
    }

    /// The full multi-line report.
    pub fn as_string(&self) -> String {
        let (start, end) = self.source.span_positions(self.span);
        let mut out = format!(
            "{}: {}\nFile {}, line {}\n",
            self.kind.name(),
            self.details,
            self.source.name(),
            start.line + 1
        );

        if self.kind == ErrorKind::Runtime {
            out.push_str("Traceback (most recent call last):\n");
            for frame in &self.traceback {
                out.push_str(&format!(
                    "  File {}, line {}, in {}\n",
                    frame.source.name(),
                    frame.line(),
                    frame.display_name
                ));
            }
        }

        out.push('\n');
        out.push_str(&string_with_arrows(self.source.text(), start, end));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl std::error::Error for Diagnostic {}
