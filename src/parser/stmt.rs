use log::debug;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{ErrorImpl, ParsingError},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses one statement starting at the current token.
///
/// A bare terminator produces no statement. Every statement returns with
/// its terminator consumed, or with a closing `}` as the peek token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, ParsingError> {
    let token = parser.current_token();
    let kind = token.kind;
    if kind.is_terminator() {
        return Ok(None);
    }

    debug!("Entering {} statement at {}:{}", kind, token.line, token.column);

    let handler = parser.get_stmt_lookup().get(&kind).copied();
    if let Some(handler) = handler {
        return handler(parser).map(Some);
    }

    parse_expression_stmt(parser).map(Some)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, ParsingError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.finish_statement()?;

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, ParsingError> {
    let token = parser.current_token().clone();

    let name = parser.expect_peek(TokenKind::Identifier, ErrorImpl::expected("identifier"))?;
    parser.expect_peek(TokenKind::Assignment, ErrorImpl::expected("`=`"))?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.finish_statement()?;

    Ok(Stmt::Let(LetStmt {
        token,
        name: Identifier::from_token(name),
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParsingError> {
    let token = parser.current_token().clone();

    let peek = parser.peek_token_kind();
    let value = if peek.is_terminator() || peek == TokenKind::CloseCurly {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.finish_statement()?;

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

/// A block used as a statement on its own: `{ ... }`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, ParsingError> {
    let block = parse_block(parser)?;
    parser.finish_statement()?;

    Ok(Stmt::Block(block))
}

/// Parses statements from the current `{` up to its matching `}`, leaving
/// the `}` as the current token.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, ParsingError> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, ParsingError> {
    let token = parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parse_stmt(parser)? {
            statements.push(stmt);
        }
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::CloseCurly {
        return Err(parser.current_error(ErrorImpl::UnclosedBlock));
    }

    Ok(BlockStmt { token, statements })
}
