use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map
    };

    /// Characters that always form a token on their own.
    pub static ref SINGLE_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'+', TokenKind::Plus);
        map.insert(b'/', TokenKind::Slash);
        map.insert(b',', TokenKind::Comma);
        map.insert(b'{', TokenKind::OpenCurly);
        map.insert(b'}', TokenKind::CloseCurly);
        map.insert(b'(', TokenKind::OpenParen);
        map.insert(b')', TokenKind::CloseParen);
        map.insert(b'.', TokenKind::Dot);
        map.insert(b';', TokenKind::Semicolon);
        map
    };

    /// Characters whose token changes when followed by a specific second character.
    pub static ref DOUBLE_LOOKUP: HashMap<u8, DoubleToken> = {
        let mut map = HashMap::new();
        map.insert(b'=', DoubleToken { next: b'=', single: TokenKind::Assignment, double: TokenKind::Equals });
        map.insert(b'!', DoubleToken { next: b'=', single: TokenKind::Not, double: TokenKind::NotEquals });
        map.insert(b'>', DoubleToken { next: b'=', single: TokenKind::Greater, double: TokenKind::GreaterEquals });
        map.insert(b'<', DoubleToken { next: b'=', single: TokenKind::Less, double: TokenKind::LessEquals });
        map.insert(b'*', DoubleToken { next: b'*', single: TokenKind::Star, double: TokenKind::Power });
        map.insert(b'-', DoubleToken { next: b'>', single: TokenKind::Dash, double: TokenKind::PipeOp });
        map
    };
}

#[derive(Debug, Clone, Copy)]
pub struct DoubleToken {
    pub next: u8,
    pub single: TokenKind,
    pub double: TokenKind,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Newline,

    Identifier,
    Int,
    Float,
    True,
    False,
    // Reserved, never produced by the scanner
    String,

    Comma,
    Dot,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Power, // **

    And,
    Or,
    Not, // ! or not

    Equals,    // ==
    NotEquals, // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    // Reserved
    Let,
    Fn,
    Return,
    If,
    Else,

    // Pipelines
    PipeCtx, // @
    PipeFn,  // @fn
    PipeOp,  // ->
}

impl TokenKind {
    /// Tokens that close a statement: `;`, a newline or the end of input.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::Newline | TokenKind::EOF)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    /// Zero-based line of the first character
    pub line: usize,
    /// Zero-based byte offset of the first character within its line
    pub column: usize,
    /// Diagnostic attached by the scanner to `Illegal` tokens
    pub note: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Newline => write!(f, "newline"),
            _ => write!(f, "{}", self.literal),
        }
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
