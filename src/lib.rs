#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, ParsingError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Returns the zero-based `line` of `source` without its line break, or an
/// empty string past the last line.
pub fn get_line(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line)
        .map(|text| text.trim_end_matches('\r'))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{ErrorImpl, ParsingError},
        lexer::tokens::{Token, TokenKind},
        parser::parser::parse,
    };

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\r\nsecond\n\nTesting { }\n";

        assert_eq!(super::get_line(source, 0), "Hello, world!");
        assert_eq!(super::get_line(source, 1), "second");
        assert_eq!(super::get_line(source, 2), "");
        assert_eq!(super::get_line(source, 3), "Testing { }");
        assert_eq!(super::get_line(source, 9), "");
    }

    #[test]
    fn test_render_error() {
        let source = "let a = 1\nlet b = %";
        let error = parse(source).unwrap_err();
        assert_eq!(error.token().kind, TokenKind::Illegal);

        let rendered = super::render_error(source, &error);
        let expected = [
            "Error: IllegalToken: illegal token \"%\": unexpected character",
            "-> 2:9",
            "  |",
            "2 | let b = %",
            "  | --------^",
        ]
        .join("\n");

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_error_with_tip() {
        let source = "if true { 128 ";
        let error = parse(source).unwrap_err();

        let rendered = super::render_error(source, &error);
        assert!(rendered.starts_with(
            "Error: UnclosedBlock: expected } at the end of block (Did you forget a closing `}`?)\n"
        ));
        assert!(rendered.ends_with("1 | if true { 128 \n  | --------------^"));
    }

    #[test]
    fn test_render_error_caret_counts_characters() {
        let source = "let é = %";
        let error = ParsingError::new(
            ErrorImpl::expected("expression"),
            Token {
                kind: TokenKind::Illegal,
                literal: String::from("%"),
                line: 0,
                column: 9,
                note: None,
            },
        );

        let rendered = super::render_error(source, &error);
        assert!(rendered.ends_with("1 | let é = %\n  | --------^"));
    }
}

/// Formats `error` as a caret diagnostic pointing into `source`.
pub fn render_error(source: &str, error: &ParsingError) -> String {
    /*
        Error: name: message (tip)
        -> 2:9
          |
        2 | let a = #
          | --------^
    */

    let token = error.token();
    let line_string = (token.line + 1).to_string();
    let padding = line_string.len() + 2;

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}: {}", error.get_error_name(), error.message())
    } else {
        format!(
            "Error: {}: {} ({})",
            error.get_error_name(),
            error.message(),
            error.get_tip()
        )
    };

    let line = get_line(source, token.line);
    // Columns count bytes, the caret counts characters
    let arrows = line.get(..token.column).unwrap_or(line).chars().count() + 1;

    [
        header,
        format!("-> {}:{}", token.line + 1, token.column + 1),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ]
    .join("\n")
}
