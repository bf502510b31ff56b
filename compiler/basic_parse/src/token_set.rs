//! Bitsets of token kinds, used for first-sets and "Expected ..." messages.

use basic_ir::{Keyword, TokenKind, TokenTag};

/// A set of token tags and keywords.
///
/// Tags occupy bits `0..TokenTag::COUNT`, keywords the bits after them.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenSet(u64);

const fn tag_bit(tag: TokenTag) -> u64 {
    1u64 << (tag as u8)
}

const fn keyword_bit(kw: Keyword) -> u64 {
    1u64 << (TokenTag::COUNT + kw as u8)
}

/// All tags in bit order, for describing a set.
const TAGS: [TokenTag; TokenTag::COUNT as usize] = [
    TokenTag::Int,
    TokenTag::Float,
    TokenTag::Str,
    TokenTag::Ident,
    TokenTag::Plus,
    TokenTag::Minus,
    TokenTag::Star,
    TokenTag::Slash,
    TokenTag::Percent,
    TokenTag::Caret,
    TokenTag::Eq,
    TokenTag::EqEq,
    TokenTag::NotEq,
    TokenTag::Lt,
    TokenTag::LtEq,
    TokenTag::Gt,
    TokenTag::GtEq,
    TokenTag::LParen,
    TokenTag::RParen,
    TokenTag::LBracket,
    TokenTag::RBracket,
    TokenTag::Comma,
    TokenTag::Arrow,
    TokenTag::Newline,
    TokenTag::Eof,
];

impl TokenSet {
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        TokenSet(self.0 | tag_bit(tag))
    }

    #[must_use]
    pub const fn with_keyword(self, kw: Keyword) -> Self {
        TokenSet(self.0 | keyword_bit(kw))
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        let bit = match (kind.tag(), kind.keyword()) {
            (Some(tag), _) => tag_bit(tag),
            (None, Some(kw)) => keyword_bit(kw),
            (None, None) => 0,
        };
        self.0 & bit != 0
    }

    /// Human-readable listing: `int, float or '('`.
    pub fn describe(&self) -> String {
        let mut items: Vec<String> = TAGS
            .iter()
            .filter(|&&tag| self.0 & tag_bit(tag) != 0)
            .map(|tag| tag.describe().to_owned())
            .collect();
        items.extend(
            Keyword::ALL
                .iter()
                .filter(|&&kw| self.0 & keyword_bit(kw) != 0)
                .map(|kw| format!("'{}'", kw.as_str())),
        );

        match items.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        }
    }
}

/// Tokens that can start an `atom`.
pub const ATOM_START: TokenSet = TokenSet::new()
    .with(TokenTag::Int)
    .with(TokenTag::Float)
    .with(TokenTag::Str)
    .with(TokenTag::Ident)
    .with(TokenTag::LParen)
    .with(TokenTag::LBracket)
    .with_keyword(Keyword::If)
    .with_keyword(Keyword::For)
    .with_keyword(Keyword::While)
    .with_keyword(Keyword::Const);

/// Tokens that can start a `factor` (an atom or a sign).
pub const FACTOR_START: TokenSet = ATOM_START.with(TokenTag::Plus).with(TokenTag::Minus);

/// Tokens that can start an `expr`.
pub const EXPR_START: TokenSet = FACTOR_START
    .with_keyword(Keyword::Auto)
    .with_keyword(Keyword::Not);

/// Tokens that can start a `statement`.
pub const STATEMENT_START: TokenSet = EXPR_START
    .with_keyword(Keyword::Return)
    .with_keyword(Keyword::Continue)
    .with_keyword(Keyword::Break);

/// Tokens that may follow a complete top-level expression.
pub const AFTER_EXPR: TokenSet = TokenSet::new()
    .with(TokenTag::Plus)
    .with(TokenTag::Minus)
    .with(TokenTag::Star)
    .with(TokenTag::Slash)
    .with(TokenTag::Percent)
    .with(TokenTag::Caret)
    .with(TokenTag::EqEq)
    .with(TokenTag::NotEq)
    .with(TokenTag::Lt)
    .with(TokenTag::LtEq)
    .with(TokenTag::Gt)
    .with(TokenTag::GtEq)
    .with(TokenTag::LParen)
    .with(TokenTag::Newline)
    .with(TokenTag::Eof)
    .with_keyword(Keyword::And)
    .with_keyword(Keyword::Or);
