//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `IMPL_NODE!` - Implements the `Node` capability for AST structs
//!
//! These macros reduce boilerplate in the scanner and the syntax tree.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$line` - Zero-based line of the first character
/// * `$column` - Zero-based column of the first character
/// * `$note` - Optional diagnostic note (defaults to `None`)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, String::from("42"), 0, 4);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            column: $column,
            note: None,
        }
    };
    ($kind:expr, $literal:expr, $line:expr, $column:expr, $note:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            column: $column,
            note: Some(String::from($note)),
        }
    };
}

/// Implements `Node` for structs that keep their originating token in a
/// `token` field.
///
/// # Example
///
/// ```ignore
/// IMPL_NODE!(Identifier, IntegerLiteral);
/// ```
#[macro_export]
macro_rules! IMPL_NODE {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $crate::ast::ast::Node for $node {
                fn token(&self) -> &$crate::lexer::tokens::Token {
                    &self.token
                }
            }
        )+
    };
}
