//! Source files and line/column positions.

use std::sync::Arc;

use crate::Span;

/// A named piece of program text.
///
/// The name is only ever displayed (`File <stdin>, line 1`); it is a path for
/// scripts and a placeholder such as `<stdin>` for REPL input.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    text: String,
}

/// Source shared between tokens' owners, closures and diagnostics.
pub type SharedSource = Arc<SourceFile>;

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Convenience constructor returning the shared form.
    pub fn shared(name: impl Into<String>, text: impl Into<String>) -> SharedSource {
        Arc::new(Self::new(name, text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line/column of a byte offset.
    ///
    /// Offsets past the end clamp to the end of the text. Offsets inside a
    /// multi-byte character resolve to that character.
    pub fn position_at(&self, offset: u32) -> Position {
        let target = offset as usize;
        let mut pos = Position::START;
        for ch in self.text.chars() {
            if pos.index + ch.len_utf8() > target {
                break;
            }
            pos.advance(ch);
        }
        pos
    }

    /// Start and end positions of a span.
    pub fn span_positions(&self, span: Span) -> (Position, Position) {
        (self.position_at(span.start), self.position_at(span.end))
    }
}

/// Cursor into source text: byte index, zero-based line and column.
///
/// Columns count characters, so carets line up under multi-byte text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        index: 0,
        line: 0,
        column: 0,
    };

    /// Step over `ch`.
    pub fn advance(&mut self, ch: char) -> &mut Self {
        self.index += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self
    }
}
