//! Tokens produced by the lexer.

use std::fmt;

use crate::{Name, Span, StrId, StringInterner};

/// Reserved words.
///
/// An identifier lexeme found by [`Keyword::lookup`] is re-tagged as a
/// keyword token so the parser can match on it structurally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Keyword {
    Auto,
    And,
    Or,
    Not,
    If,
    Then,
    Elif,
    Else,
    For,
    To,
    Increment,
    Decrement,
    While,
    Const,
    End,
    Return,
    Continue,
    Break,
}

impl Keyword {
    pub const ALL: [Keyword; 18] = [
        Keyword::Auto,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::If,
        Keyword::Then,
        Keyword::Elif,
        Keyword::Else,
        Keyword::For,
        Keyword::To,
        Keyword::Increment,
        Keyword::Decrement,
        Keyword::While,
        Keyword::Const,
        Keyword::End,
        Keyword::Return,
        Keyword::Continue,
        Keyword::Break,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Auto => "auto",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::To => "to",
            Keyword::Increment => "increment",
            Keyword::Decrement => "decrement",
            Keyword::While => "while",
            Keyword::Const => "const",
            Keyword::End => "end",
            Keyword::Return => "return",
            Keyword::Continue => "continue",
            Keyword::Break => "break",
        }
    }

    pub fn lookup(s: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == s)
    }
}

/// Token payload and classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Int(i64),
    /// Float stored as bits for `Eq`/`Hash`.
    Float(u64),
    /// Cooked string contents (escapes resolved), stored in the token list.
    Str(StrId),
    Ident(Name),
    Keyword(Keyword),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Arrow,

    Newline,
    Eof,
}

/// Payload-free token classification, used for expected-token sets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    Int,
    Float,
    Str,
    Ident,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Arrow,
    Newline,
    Eof,
}

impl TokenTag {
    /// Number of tags; keyword slots in bitsets start here.
    pub const COUNT: u8 = 25;

    /// How the tag reads in an "Expected ..." message.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenTag::Int => "int",
            TokenTag::Float => "float",
            TokenTag::Str => "string",
            TokenTag::Ident => "identifier",
            TokenTag::Plus => "'+'",
            TokenTag::Minus => "'-'",
            TokenTag::Star => "'*'",
            TokenTag::Slash => "'/'",
            TokenTag::Percent => "'%'",
            TokenTag::Caret => "'^'",
            TokenTag::Eq => "'='",
            TokenTag::EqEq => "'=='",
            TokenTag::NotEq => "'!='",
            TokenTag::Lt => "'<'",
            TokenTag::LtEq => "'<='",
            TokenTag::Gt => "'>'",
            TokenTag::GtEq => "'>='",
            TokenTag::LParen => "'('",
            TokenTag::RParen => "')'",
            TokenTag::LBracket => "'['",
            TokenTag::RBracket => "']'",
            TokenTag::Comma => "','",
            TokenTag::Arrow => "'=>'",
            TokenTag::Newline => "newline",
            TokenTag::Eof => "end of input",
        }
    }
}

impl TokenKind {
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Keyword carried by this token, if any.
    #[inline]
    pub fn keyword(self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Classification without the payload.
    ///
    /// Keywords are not a tag; callers check [`TokenKind::keyword`] first.
    pub fn tag(self) -> Option<TokenTag> {
        Some(match self {
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::Str(_) => TokenTag::Str,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Keyword(_) => return None,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Star => TokenTag::Star,
            TokenKind::Slash => TokenTag::Slash,
            TokenKind::Percent => TokenTag::Percent,
            TokenKind::Caret => TokenTag::Caret,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::EqEq => TokenTag::EqEq,
            TokenKind::NotEq => TokenTag::NotEq,
            TokenKind::Lt => TokenTag::Lt,
            TokenKind::LtEq => TokenTag::LtEq,
            TokenKind::Gt => TokenTag::Gt,
            TokenKind::GtEq => TokenTag::GtEq,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Arrow => TokenTag::Arrow,
            TokenKind::Newline => TokenTag::Newline,
            TokenKind::Eof => TokenTag::Eof,
        })
    }

    /// Upper-case kind label used in token dumps (`INT`, `KEYWORD`, `PLUS`).
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INT",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Str(_) => "STRING",
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MUL",
            TokenKind::Slash => "DIV",
            TokenKind::Percent => "MOD",
            TokenKind::Caret => "POW",
            TokenKind::Eq => "EQ",
            TokenKind::EqEq => "EE",
            TokenKind::NotEq => "NE",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LSQUARE",
            TokenKind::RBracket => "RSQUARE",
            TokenKind::Comma => "COMMA",
            TokenKind::Arrow => "ARROW",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }
}

/// A token and where it came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// `token.matches(KEYWORD, "if")` from the grammar, as a typed check.
    #[inline]
    pub fn matches_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }
}

/// [`TokenList::dump`] adapter: `KIND` or `KIND:value`.
struct TokenDisplay<'a> {
    token: &'a Token,
    list: &'a TokenList,
    interner: &'a StringInterner,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.token.kind;
        f.write_str(kind.label())?;
        match kind {
            TokenKind::Int(v) => write!(f, ":{v}"),
            TokenKind::Float(bits) => write!(f, ":{:?}", f64::from_bits(bits)),
            TokenKind::Str(id) => write!(f, ":{:?}", self.list.get_str(id)),
            TokenKind::Ident(name) => write!(f, ":{}", self.interner.lookup(name)),
            TokenKind::Keyword(kw) => write!(f, ":{}", kw.as_str()),
            _ => Ok(()),
        }
    }
}

/// Lexer output. Always ends with exactly one `Eof` token.
///
/// String literal contents are kept here, indexed by the `StrId` in their
/// `TokenKind::Str`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    strings: Vec<Box<str>>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store literal contents for a `TokenKind::Str`.
    pub fn push_str(&mut self, text: String) -> StrId {
        let id = StrId::new(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(text.into_boxed_str());
        id
    }

    /// Literal contents; ids from another list resolve to the empty string.
    pub fn get_str(&self, id: StrId) -> &str {
        self.strings.get(id.index()).map_or("", |s| &**s)
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// `[KIND:value, KIND, ...]`, the same shape on every run.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let parts: Vec<String> = self
            .tokens
            .iter()
            .map(|token| {
                TokenDisplay {
                    token,
                    list: self,
                    interner,
                }
                .to_string()
            })
            .collect();
        format!("[{}]", parts.join(", "))
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

crate::static_assert_size!(Token, 24);
