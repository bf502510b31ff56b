//! Function literals.

use basic_ir::{ExprId, ExprKind, Keyword, TokenKind, TokenTag};

use crate::{ParseError, Parser, TokenSet};

impl Parser<'_> {
    /// `const NAME? ( params ) => expr` or `const NAME? ( params ) NEWLINE statements end`.
    pub(crate) fn func_def(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;

        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Some(name)
            }
            _ => None,
        };
        if !self.check(TokenTag::LParen) {
            let mut expected = TokenSet::new().with(TokenTag::LParen);
            if name.is_none() {
                expected = expected.with(TokenTag::Ident);
            }
            return Err(ParseError::expected(expected, self.current_span()));
        }
        self.cursor.advance();

        let mut params = Vec::new();
        if let TokenKind::Ident(first) = self.cursor.current_kind() {
            self.cursor.advance();
            params.push(first);
            while self.check(TokenTag::Comma) {
                self.cursor.advance();
                params.push(self.cursor.expect_ident()?.0);
            }
            if !self.check(TokenTag::RParen) {
                return Err(ParseError::expected(
                    TokenSet::new().with(TokenTag::Comma).with(TokenTag::RParen),
                    self.current_span(),
                ));
            }
        } else if !self.check(TokenTag::RParen) {
            return Err(ParseError::expected(
                TokenSet::new().with(TokenTag::Ident).with(TokenTag::RParen),
                self.current_span(),
            ));
        }
        self.cursor.advance();
        let params = self.arena.alloc_params(params);

        if self.check(TokenTag::Arrow) {
            self.cursor.advance();
            let body = self.expr()?;
            let span = start.merge(self.span_of(body));
            return Ok(self.alloc(
                ExprKind::FunctionDef {
                    name,
                    params,
                    body,
                    auto_return: true,
                },
                span,
            ));
        }

        if !self.check(TokenTag::Newline) {
            return Err(ParseError::expected(
                TokenSet::new().with(TokenTag::Arrow).with(TokenTag::Newline),
                self.current_span(),
            ));
        }
        self.cursor.advance();
        let body = self.statements()?;
        let end = self.cursor.expect_keyword(Keyword::End)?.span;
        Ok(self.alloc(
            ExprKind::FunctionDef {
                name,
                params,
                body,
                auto_return: false,
            },
            start.merge(end),
        ))
    }
}
