//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a syntax tree. It uses a Pratt parser for expressions with
//! operator precedence and handles:
//!
//! - Statement parsing (let, return, blocks, expression statements)
//! - Expression parsing (prefix and infix operators, calls, if, functions)
//! - Reporting the first error with the token it was found at
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
