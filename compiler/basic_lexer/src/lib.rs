//! Lexer for BASIC using logos with string interning.
//!
//! Lexing is all-or-nothing: the first illegal character stops it and no
//! partial token list is returned.

mod raw_token;

use basic_diagnostic::{Diagnostic, ErrorKind};
use basic_ir::{Keyword, SharedSource, Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

use raw_token::RawToken;

/// The two ways lexing can fail.
///
/// `Display` gives the diagnostic details text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("'{ch}'")]
    IllegalCharacter { ch: char, span: Span },
    #[error("'=' (after '!')")]
    ExpectedCharacter { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::IllegalCharacter { span, .. } | LexError::ExpectedCharacter { span } => *span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
            LexError::ExpectedCharacter { .. } => ErrorKind::ExpectedCharacter,
        }
    }

    pub fn into_diagnostic(self, source: SharedSource) -> Diagnostic {
        Diagnostic::new(self.kind(), self.to_string(), self.span(), source)
    }
}

/// Tokenize `source`, interning identifiers. String contents are stored in
/// the returned list.
///
/// The list always ends with one zero-width `Eof` token at `source.len()`.
#[tracing::instrument(level = "trace", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::from_range(range.clone());
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = source[range.start..].chars().next().unwrap_or('\0');
                let span = Span::from_range(range.start..range.start + ch.len_utf8());
                return Err(LexError::IllegalCharacter { ch, span });
            }
        };

        if let Some(kind) = convert_token(raw, slice, span, interner, &mut result)? {
            result.push(Token::new(kind, span));
        }
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    tracing::trace!(tokens = result.len(), "lexed");
    Ok(result)
}

/// Cook a raw token. Comments produce `None`.
fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    list: &mut TokenList,
) -> Result<Option<TokenKind>, LexError> {
    let kind = match raw {
        RawToken::LineComment => return Ok(None),
        RawToken::Bang => return Err(LexError::ExpectedCharacter { span }),

        // An integer too wide for i64 degrades to a float rather than failing.
        RawToken::Int => match slice.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => TokenKind::float(parse_float(slice)),
        },
        RawToken::Float => TokenKind::float(parse_float(slice)),
        RawToken::String => {
            let body = slice.strip_prefix('"').unwrap_or(slice);
            let body = strip_closing_quote(body);
            TokenKind::Str(list.push_str(unescape_string(body)))
        }
        RawToken::Ident => match Keyword::lookup(slice) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(interner.intern(slice)),
        },

        RawToken::Newline => TokenKind::Newline,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
    };
    Ok(Some(kind))
}

/// The regex guarantees digits with an optional single dot, which `f64`
/// always accepts (`1.` included).
fn parse_float(slice: &str) -> f64 {
    slice.parse::<f64>().unwrap_or(f64::NAN)
}

/// Drop the closing quote unless it is escaped (`"abc\"` is unterminated).
fn strip_closing_quote(body: &str) -> &str {
    let Some(inner) = body.strip_suffix('"') else {
        return body;
    };
    let trailing_backslashes = inner.chars().rev().take_while(|&c| c == '\\').count();
    if trailing_backslashes % 2 == 0 {
        inner
    } else {
        body
    }
}

/// Resolve `\n` and `\t`; any other escaped character stands for itself.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}
