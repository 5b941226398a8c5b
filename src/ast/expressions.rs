use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, IMPL_NODE};

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Identifier
/// A name: a variable reference, a let binding or a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        Identifier {
            value: token.literal.clone(),
            token,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// A 64-bit signed integer; the token keeps the normalized literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Float Literal
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

impl Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Bool Expression
/// `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub token: Token,
    pub value: bool,
}

impl Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to one operand, such as `-a` or `not a`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    /// The operator token
    pub token: Token,
    pub operand: Box<Expr>,
}

impl PrefixExpr {
    pub fn operator(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.operator(), self.operand)
    }
}

/// Infix Expression
/// A binary operation between two expressions, such as `a + b` or `a and b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    /// The operator token
    pub token: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl InfixExpr {
    pub fn operator(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator(), self.right)
    }
}

/// If Expression
/// `if <condition> { ... }` with an optional `else { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }

        Ok(())
    }
}

/// Function Literal
/// `fn name(a, b) { ... }`; the name is optional. Functions introduced with
/// `@fn` are pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// `fn` or `@fn`
    pub token: Token,
    pub name: Option<Identifier>,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub is_pipeline_stage: bool,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_ref().map(|name| name.value.as_str()).unwrap_or("");

        write!(
            f,
            "{} {}({}) {}",
            self.token.literal,
            name,
            join(&self.parameters),
            self.body
        )
    }
}

/// Call Expression
/// Any expression followed by a parenthesized argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The opening `(`
    pub token: Token,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.callee, join(&self.arguments))
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

IMPL_NODE!(
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    BoolExpr,
    PrefixExpr,
    InfixExpr,
    IfExpr,
    FunctionLiteral,
    CallExpr,
);
