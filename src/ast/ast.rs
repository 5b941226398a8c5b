use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    expressions::{
        BoolExpr, CallExpr, FloatLiteral, FunctionLiteral, Identifier, IfExpr, InfixExpr,
        IntegerLiteral, PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Every node reconstructs to canonical source text through `Display` and
/// remembers the token it started at.
pub trait Node: Display {
    fn token(&self) -> &Token;
}

/// Statement
///
/// A construct that produces no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Node for Stmt {
    fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => stmt.token(),
            Stmt::Return(stmt) => stmt.token(),
            Stmt::Expression(stmt) => stmt.token(),
            Stmt::Block(stmt) => stmt.token(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// A construct that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Bool(BoolExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(Box<IfExpr>),
    Function(Box<FunctionLiteral>),
    Call(CallExpr),
}

impl Node for Expr {
    fn token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => expr.token(),
            Expr::Integer(expr) => expr.token(),
            Expr::Float(expr) => expr.token(),
            Expr::Bool(expr) => expr.token(),
            Expr::Prefix(expr) => expr.token(),
            Expr::Infix(expr) => expr.token(),
            Expr::If(expr) => expr.token(),
            Expr::Function(expr) => expr.token(),
            Expr::Call(expr) => expr.token(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Float(expr) => expr.fmt(f),
            Expr::Bool(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// Program
///
/// The parser's output: every top-level statement, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements, "")
    }
}

/// Writes a statement sequence so that it parses back into the same
/// statements: expression and block statements get a `;` whenever another
/// statement follows them.
pub(crate) fn write_statements(
    f: &mut fmt::Formatter<'_>,
    statements: &[Stmt],
    separator: &str,
) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", stmt)?;

        let is_last = i + 1 == statements.len();
        if !is_last && matches!(stmt, Stmt::Expression(_) | Stmt::Block(_)) {
            f.write_str(";")?;
        }
    }

    Ok(())
}
