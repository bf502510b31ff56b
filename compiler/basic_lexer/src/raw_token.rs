//! Raw logos tokens, before interning and keyword classification.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    LineComment,

    /// `;` separates statements exactly like a line break.
    #[token("\n")]
    #[token(";")]
    Newline,

    #[regex(r"[0-9]+")]
    Int,

    /// At most one dot; `1.2.3` lexes as `1.2` then an illegal `.`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,

    /// An unterminated string runs to end of input.
    #[regex(r#""([^"\\]|\\(.|\n))*"?"#)]
    String,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    /// `!` is only valid as the start of `!=`.
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("=>")]
    Arrow,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
}
