//! Statement lists and statements.

use basic_ir::{ExprId, ExprKind, Keyword, Span, TokenKind, TokenTag};

use crate::token_set::{AFTER_EXPR, STATEMENT_START};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whole program: a statement list that must reach end of input.
    pub(crate) fn parse_program(&mut self) -> Result<ExprId, ParseError> {
        let root = self.statements()?;
        if self.cursor.is_at_end() {
            return Ok(root);
        }

        // The list stopped at a token that cannot start a statement. Re-parse
        // there so the error names what a statement could have started with.
        if matches!(self.cursor.previous_kind(), None | Some(TokenKind::Newline)) {
            self.statement()?;
        }
        Err(ParseError::expected(AFTER_EXPR, self.current_span()))
    }

    /// Newline-separated statements, as a `Block`.
    ///
    /// The list ends at the first position where a statement cannot start;
    /// the enclosing rule then checks for its terminator (`end`, `elif`,
    /// `else` or end of input).
    pub(crate) fn statements(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span();
        let mut stmts = Vec::new();

        self.cursor.skip_newlines();
        if let Some(first) = self.try_parse(Self::statement)? {
            stmts.push(first);
            while self.check(TokenTag::Newline) {
                self.cursor.skip_newlines();
                match self.try_parse(Self::statement)? {
                    Some(stmt) => stmts.push(stmt),
                    None => break,
                }
            }
        }

        let span = match (stmts.first(), stmts.last()) {
            (Some(&first), Some(&last)) => self.span_of(first).merge(self.span_of(last)),
            _ => Span::point(start.start),
        };
        let range = self.arena.alloc_expr_list(stmts);
        Ok(self.alloc(ExprKind::Block(range), span))
    }

    /// `return expr?`, `continue`, `break` or an expression.
    pub(crate) fn statement(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span();

        if self.check_keyword(Keyword::Return) {
            self.cursor.advance();
            // `return` followed by something that cannot start an expression
            // (newline, `end`, ...) returns nothing.
            let value = self.try_parse(Self::expr)?;
            let span = value.map_or(start, |v| start.merge(self.span_of(v)));
            return Ok(self.alloc(ExprKind::Return(value), span));
        }
        if self.check_keyword(Keyword::Continue) {
            self.cursor.advance();
            return Ok(self.alloc(ExprKind::Continue, start));
        }
        if self.check_keyword(Keyword::Break) {
            self.cursor.advance();
            return Ok(self.alloc(ExprKind::Break, start));
        }

        if !STATEMENT_START.contains(self.cursor.current_kind()) {
            return Err(ParseError::expected(STATEMENT_START, start));
        }
        self.expr()
    }
}
