use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::ParsingError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator binding strength, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Or,
    And,
    Not,
    Equality,
    Comparison,
    Additive,
    Multiplicative,
    Prefix,
    Exponent,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, ParsingError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, ParsingError>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, ParsingError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Or, BindingPower::Or, parse_infix_expr);
    parser.led(TokenKind::And, BindingPower::And, parse_infix_expr);

    // Equality and comparison
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_infix_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_infix_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_infix_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_infix_expr);

    // Additive, multiplicative and exponent
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Power, BindingPower::Exponent, parse_infix_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_expr);
    parser.nud(TokenKind::Float, parse_float_expr);
    parser.nud(TokenKind::True, parse_bool_expr);
    parser.nud(TokenKind::False, parse_bool_expr);

    // Prefix operators
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_not_expr);

    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_function_expr);
    parser.nud(TokenKind::PipeFn, parse_function_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
