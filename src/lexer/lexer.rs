use log::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, DOUBLE_LOOKUP, RESERVED_LOOKUP, SINGLE_LOOKUP};

/// Pull-based scanner turning source text into tokens one call at a time.
///
/// The scanner keeps the character under the cursor in `ch`, its offset in
/// `pos` and the offset of the next character to read in `read_pos`. Columns
/// are derived from the offset just past the most recent newline.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    /// Character under the cursor, `0` once input is exhausted
    ch: u8,
    pos: usize,
    read_pos: usize,
    line: usize,
    line_start: usize,
    /// Set once `EOF` has been handed out through the iterator
    finished: bool,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        let mut scanner = Scanner {
            source: String::from(source),
            ch: 0,
            pos: 0,
            read_pos: 0,
            line: 0,
            line_start: 0,
            finished: false,
        };

        scanner.read_next();
        scanner
    }

    /// Consumes zero or more characters and returns exactly one token.
    ///
    /// Once the input is exhausted every call returns a zero-length `EOF`
    /// token. Unknown characters come back as `Illegal` tokens carrying a
    /// note; scanning is never aborted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'\n' => {
                let token = MK_TOKEN!(TokenKind::Newline, String::from("\n"), self.line, self.column());
                self.line += 1;
                self.line_start = self.pos + 1;
                self.read_next();
                token
            }
            b'@' => self.read_pipe(),
            0 => MK_TOKEN!(TokenKind::EOF, String::new(), self.line, self.column()),
            ch if is_identifier_start(ch) => self.read_identifier(),
            ch if ch.is_ascii_digit() => self.read_number(),
            ch => {
                if let Some(double) = DOUBLE_LOOKUP.get(&ch) {
                    if self.peek_next() == double.next {
                        let literal = format!("{}{}", ch as char, double.next as char);
                        let token = MK_TOKEN!(double.double, literal, self.line, self.column());
                        self.skip_chars(1);
                        token
                    } else {
                        let token = MK_TOKEN!(double.single, String::from(ch as char), self.line, self.column());
                        self.read_next();
                        token
                    }
                } else if let Some(kind) = SINGLE_LOOKUP.get(&ch) {
                    let token = MK_TOKEN!(*kind, String::from(ch as char), self.line, self.column());
                    self.read_next();
                    token
                } else {
                    self.read_illegal()
                }
            }
        };

        trace!("scanned {} {:?} at {}:{}", token.kind, token.literal, token.line, token.column);
        token
    }

    fn column(&self) -> usize {
        self.pos - self.line_start
    }

    /// Moves the cursor one character forward.
    fn read_next(&mut self) {
        self.ch = self.peek_at(self.read_pos);
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    /// Moves the cursor `step` characters past the next one.
    fn skip_chars(&mut self, step: usize) {
        self.read_pos += step;
        self.read_next();
    }

    fn peek_next(&self) -> u8 {
        self.peek_at(self.read_pos)
    }

    /// Returns the byte at `pos`, or `0` past the end of input.
    fn peek_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\r') {
            self.read_next();
        }
    }

    /// Checks whether `word` starts at the next character and forms a whole
    /// word there. The cursor is left untouched.
    fn lookahead_word(&self, word: &str) -> bool {
        let start = self.read_pos;
        let end = start + word.len();

        self.source.as_bytes().get(start..end) == Some(word.as_bytes())
            && !is_identifier_char(self.peek_at(end))
    }

    fn read_pipe(&mut self) -> Token {
        let (line, column) = (self.line, self.column());

        if self.lookahead_word("fn") {
            self.skip_chars(2);
            return MK_TOKEN!(TokenKind::PipeFn, String::from("@fn"), line, column);
        }

        self.read_next();
        MK_TOKEN!(TokenKind::PipeCtx, String::from("@"), line, column)
    }

    fn read_identifier(&mut self) -> Token {
        let (line, column) = (self.line, self.column());
        let start = self.pos;

        while is_identifier_char(self.ch) {
            self.read_next();
        }

        let literal = String::from(&self.source[start..self.pos]);
        let kind = RESERVED_LOOKUP
            .get(literal.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, literal, line, column)
    }

    /// Reads an integer or float literal. Underscores between digits are
    /// separators and are dropped from the literal.
    fn read_number(&mut self) -> Token {
        let (line, column) = (self.line, self.column());
        let start = self.pos;
        let mut is_float = false;

        loop {
            match self.ch {
                ch if ch.is_ascii_digit() => {
                    // `_` is only a separator when another digit follows it
                    if self.peek_next() == b'_' && self.peek_at(self.read_pos + 1).is_ascii_digit() {
                        self.read_next();
                    }
                    self.read_next();
                }
                b'.' if is_float => {
                    let token = MK_TOKEN!(
                        TokenKind::Illegal,
                        String::from("."),
                        self.line,
                        self.column(),
                        "unexpected fraction delimiter"
                    );
                    self.read_next();
                    return token;
                }
                b'.' => {
                    is_float = true;
                    self.read_next();
                }
                _ => break,
            }
        }

        let literal = self.source[start..self.pos].replace('_', "");
        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };

        MK_TOKEN!(kind, literal, line, column)
    }

    fn read_illegal(&mut self) -> Token {
        let ch = self.source[self.pos..].chars().next().unwrap_or(self.ch as char);
        let token = MK_TOKEN!(
            TokenKind::Illegal,
            String::from(ch),
            self.line,
            self.column(),
            "unexpected character"
        );

        self.skip_chars(ch.len_utf8() - 1);
        token
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is(TokenKind::EOF);
        Some(token)
    }
}

fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_identifier_char(ch: u8) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Scans the whole source, returning every token including the final `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
