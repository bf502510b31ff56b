//! Parser snapshots for speculative parsing.
//!
//! Two grammar decisions cannot be made from the next token alone:
//!
//! - whether a statement list continues after its newlines, or has reached
//!   the `end`/`elif`/`else` (or stray token) that closes it;
//! - whether `return` carries a value.
//!
//! Both are resolved by attempting the parse under [`Parser::try_parse`].
//! An attempt that fails *without consuming a token* is "no match": the
//! cursor is restored and the caller takes the other branch. An attempt
//! that fails after consuming input is a genuine syntax error and
//! propagates, which keeps error locations at the real fault.
//!
//! Snapshots only capture the cursor. A failed attempt that consumed nothing
//! cannot have allocated nodes, so the arena needs no rollback.

use crate::{ParseError, Parser};

/// Saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
}

impl Parser<'_> {
    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
        }
    }

    #[inline]
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
    }

    /// Run `f` speculatively.
    ///
    /// - `Ok(Some(v))`: parsed.
    /// - `Ok(None)`: failed at its first token; the cursor is restored.
    /// - `Err(e)`: failed after consuming input.
    pub fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.cursor.position() == snapshot.cursor_pos => {
                tracing::trace!(message = %err.message, "speculative parse rewound");
                self.restore(snapshot);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
