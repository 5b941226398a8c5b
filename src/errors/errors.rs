use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;

/// The single error surfaced by the parser: what went wrong and the token
/// at which it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingError {
    internal_error: ErrorImpl,
    token: Token,
}

impl ParsingError {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        ParsingError {
            internal_error: error_impl,
            token,
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::MissingBranchBlock { .. } => "MissingBranchBlock",
            ErrorImpl::UnclosedBlock => "UnclosedBlock",
            ErrorImpl::UnterminatedStatement { .. } => "UnterminatedStatement",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                self.token
            )),
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected } => {
                ErrorTip::Suggestion(format!("Insert {} before `{}`", expected, self.token))
            }
            ErrorImpl::MissingBranchBlock { .. } => {
                ErrorTip::Suggestion(String::from("Branch bodies must be wrapped in `{ }`"))
            }
            ErrorImpl::UnclosedBlock => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `}`?"))
            }
            ErrorImpl::UnterminatedStatement { .. } => ErrorTip::Suggestion(String::from(
                "Separate statements with `;` or a newline",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Move inner expressions into `let` bindings",
            )),
        }
    }
}

impl Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.token.line + 1,
            self.token.column + 1,
            self.internal_error
        )
    }
}

impl std::error::Error for ParsingError {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("cannot parse {kind} token")]
    UnexpectedToken { kind: String },
    #[error("illegal token {token:?}: {note}")]
    IllegalToken { token: String, note: String },
    #[error("expected {expected}")]
    ExpectedToken { expected: String },
    #[error("expected {{ for {branch} branch")]
    MissingBranchBlock { branch: String },
    #[error("expected }} at the end of block")]
    UnclosedBlock,
    #[error("expected end of statement, found {token:?}")]
    UnterminatedStatement { token: String },
    #[error("unable to parse number {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ErrorImpl {
    pub fn expected(what: &str) -> Self {
        ErrorImpl::ExpectedToken {
            expected: String::from(what),
        }
    }
}
