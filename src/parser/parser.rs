//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens lazily from a [`Scanner`], keeping exactly two of
//! them in view: the current token and the one after it (the peek token).
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{ErrorImpl, ParsingError},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression and block nesting accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// A parser is built for one source text and consumed by [`Parser::parse`].
pub struct Parser {
    /// Source of tokens, read one token ahead of `peek`
    scanner: Scanner,
    current: Token,
    peek: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Expressions and blocks currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `scanner`.
    ///
    /// The first two tokens are pulled immediately so that both the current
    /// and the peek token are available to the handlers.
    pub fn new(mut scanner: Scanner) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();

        let mut parser = Parser {
            scanner,
            current,
            peek,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        info!("Parser created");
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `error` reported at the peek token.
    pub fn expect_peek(
        &mut self,
        expected_kind: TokenKind,
        error: ErrorImpl,
    ) -> Result<Token, ParsingError> {
        if self.peek.kind != expected_kind {
            return Err(self.peek_error(error));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Ends a statement: a terminator is consumed, a closing `}` is left for
    /// the enclosing block, anything else is an error.
    pub fn finish_statement(&mut self) -> Result<(), ParsingError> {
        if self.peek.kind.is_terminator() {
            self.advance();
            return Ok(());
        }

        if self.peek.kind == TokenKind::CloseCurly {
            return Ok(());
        }

        Err(self.peek_error(ErrorImpl::UnterminatedStatement {
            token: self.peek.to_string(),
        }))
    }

    /// Opens one level of expression or block nesting, failing at the
    /// current token once `MAX_NESTING_DEPTH` levels are open.
    pub fn enter_nesting(&mut self) -> Result<(), ParsingError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.current_error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds an error located at the current token.
    pub fn current_error(&self, error: ErrorImpl) -> ParsingError {
        error_at(&self.current, error)
    }

    /// Builds an error located at the peek token.
    pub fn peek_error(&self, error: ErrorImpl) -> ParsingError {
        error_at(&self.peek, error)
    }

    /// Returns the binding power of the peek token in infix position.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns the binding power of the current token in infix position.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses the whole token stream.
    ///
    /// # Returns
    ///
    /// The complete program, or the first error encountered. No partial tree
    /// is returned alongside an error.
    pub fn parse(mut self) -> Result<Program, ParsingError> {
        info!("Beginning parse phase");

        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(&mut self)? {
                program.statements.push(stmt);
            }
            self.advance();
        }

        info!("Parsed {} statements", program.len());
        Ok(program)
    }
}

fn error_at(token: &Token, error: ErrorImpl) -> ParsingError {
    // Scanner diagnostics take precedence over whatever was expected here
    let error = match (&token.kind, &token.note) {
        (TokenKind::Illegal, Some(note)) => ErrorImpl::IllegalToken {
            token: token.literal.clone(),
            note: note.clone(),
        },
        _ => error,
    };

    debug!(
        "Parse error at {}:{} on {:?}: {}",
        token.line, token.column, token.literal, error
    );
    ParsingError::new(error, token.clone())
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It creates a scanner and a
/// parser for `source` and parses every statement until EOF.
pub fn parse(source: &str) -> Result<Program, ParsingError> {
    Parser::new(Scanner::new(source)).parse()
}
