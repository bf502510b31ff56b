//! Recursive-descent parser for BASIC.
//!
//! Produces a flat [`ExprArena`] and the id of the root `Block`. Parsing
//! stops at the first hard error; no partial tree is returned.
//!
//! The grammar lives in [`grammar`], one module per family of rules, all as
//! methods on [`Parser`].

mod cursor;
mod error;
mod grammar;
mod snapshot;
mod token_set;

use basic_ir::{Expr, ExprArena, ExprId, ExprKind, Keyword, Span, TokenList, TokenTag};

pub use cursor::Cursor;
pub use error::ParseError;
pub use snapshot::ParserSnapshot;
pub use token_set::TokenSet;

/// Result of a successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    /// The program's top-level `Block`.
    pub root: ExprId,
}

/// Parse a token list produced by `basic_lexer::lex`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<ParseOutput, ParseError> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_program()?;
    tracing::debug!(nodes = parser.arena.expr_count(), "parsed");
    Ok(ParseOutput {
        arena: parser.arena,
        root,
    })
}

/// Parser state: a cursor over the tokens and the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    tokens: &'a TokenList,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            tokens,
            arena: ExprArena::new(),
        }
    }

    // Cursor delegation

    #[inline]
    fn check(&self, tag: TokenTag) -> bool {
        self.cursor.check(tag)
    }

    #[inline]
    fn check_keyword(&self, kw: Keyword) -> bool {
        self.cursor.check_keyword(kw)
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

#[cfg(test)]
mod tests;
