//! Atoms, list literals and call suffixes.

use basic_ir::{ExprId, ExprKind, Keyword, TokenKind, TokenTag};

use crate::token_set::FACTOR_START;
use crate::{ParseError, Parser, TokenSet};

const AFTER_ARG: TokenSet = TokenSet::new().with(TokenTag::Comma).with(TokenTag::RParen);
const AFTER_ELEMENT: TokenSet = TokenSet::new().with(TokenTag::Comma).with(TokenTag::RBracket);

impl Parser<'_> {
    /// An atom followed by any number of `(args)` groups: `make(5)()`.
    pub(crate) fn call(&mut self) -> Result<ExprId, ParseError> {
        let mut callee = self.atom()?;
        while self.check(TokenTag::LParen) {
            self.cursor.advance();
            let args = self.comma_list(TokenTag::RParen, AFTER_ARG)?;
            let close = self.cursor.previous_span();
            let span = self.span_of(callee).merge(close);
            let args = self.arena.alloc_expr_list(args);
            callee = self.alloc(ExprKind::Call { callee, args }, span);
        }
        Ok(callee)
    }

    fn atom(&mut self) -> Result<ExprId, ParseError> {
        let tok = self.cursor.current();
        let kind = match tok.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::Str(id) => ExprKind::Str(self.arena.alloc_str(self.tokens.get_str(id))),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expr()?;
                self.cursor.expect(TokenTag::RParen)?;
                return Ok(inner);
            }
            TokenKind::LBracket => return self.list_expr(),
            TokenKind::Keyword(Keyword::If) => return self.if_expr(),
            TokenKind::Keyword(Keyword::For) => return self.for_expr(),
            TokenKind::Keyword(Keyword::While) => return self.while_expr(),
            TokenKind::Keyword(Keyword::Const) => return self.func_def(),
            _ => return Err(ParseError::expected(FACTOR_START, tok.span)),
        };
        self.cursor.advance();
        Ok(self.alloc(kind, tok.span))
    }

    /// `[ (expr (',' expr)*)? ]`
    fn list_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let elements = self.comma_list(TokenTag::RBracket, AFTER_ELEMENT)?;
        let span = start.merge(self.cursor.previous_span());
        let range = self.arena.alloc_expr_list(elements);
        Ok(self.alloc(ExprKind::List(range), span))
    }

    /// Comma-separated expressions up to and including `close`.
    ///
    /// Children are buffered locally and stored by the caller in one run,
    /// since nested lists allocate runs of their own meanwhile.
    fn comma_list(
        &mut self,
        close: TokenTag,
        after_item: TokenSet,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut items = Vec::new();
        if self.check(close) {
            self.cursor.advance();
            return Ok(items);
        }
        loop {
            items.push(self.expr()?);
            if self.check(TokenTag::Comma) {
                self.cursor.advance();
                continue;
            }
            if self.check(close) {
                self.cursor.advance();
                return Ok(items);
            }
            return Err(ParseError::expected(after_item, self.current_span()));
        }
    }
}
