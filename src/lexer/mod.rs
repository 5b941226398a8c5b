//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning, one token per call
//! - Recognition of keywords, identifiers, numeric literals and operators
//! - Line and column tracking for every token
//! - Illegal characters reported as tokens carrying a note

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
