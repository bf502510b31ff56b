//! Token cursor.

use basic_ir::{Keyword, Name, Span, Token, TokenKind, TokenList, TokenTag};

use crate::{ParseError, TokenSet};

/// Position in a token list.
///
/// Invariant: the list ends with `Eof` and the cursor never moves past it,
/// so [`Cursor::current`] always has a token to return.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

const EOF: Token = Token::new(TokenKind::Eof, Span::DUMMY);

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Used for progress tracking and snapshots.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len().max(1), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(tok) => tok.span,
            None => Span::point(self.current_span().start),
        }
    }

    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_kind().tag() == Some(tag)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current().matches_keyword(kw)
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let tok = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    pub fn expect(&mut self, tag: TokenTag) -> Result<Token, ParseError> {
        if self.check(tag) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                TokenSet::new().with(tag),
                self.current_span(),
            ))
        }
    }

    pub fn expect_keyword(&mut self, kw: Keyword) -> Result<Token, ParseError> {
        if self.check_keyword(kw) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                TokenSet::new().with_keyword(kw),
                self.current_span(),
            ))
        }
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(ParseError::expected(
                TokenSet::new().with(TokenTag::Ident),
                self.current_span(),
            )),
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenTag::Newline) {
            self.advance();
        }
    }
}
