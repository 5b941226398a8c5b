use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BoolExpr, CallExpr, FloatLiteral, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{ErrorImpl, ParsingError},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

// Handlers start on the first token of their construct and return with the
// current token on its last one.

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParsingError> {
    parser.enter_nesting()?;
    let expr = parse_expr_at(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParsingError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(parser.current_error(ErrorImpl::UnexpectedToken {
                kind: token_kind.to_string(),
            }))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, it takes `left` as its lhs
    while !parser.peek_token_kind().is_terminator() && bp < parser.peek_binding_power() {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => break,
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    Ok(Expr::Identifier(Identifier::from_token(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(parser.current_error(ErrorImpl::NumberParseError {
            token: token.literal,
        })),
    }
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    let token = parser.current_token().clone();

    match token.literal.parse::<f64>() {
        Ok(value) => Ok(Expr::Float(FloatLiteral { token, value })),
        Err(_) => Err(parser.current_error(ErrorImpl::NumberParseError {
            token: token.literal,
        })),
    }
}

pub fn parse_bool_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    let token = parser.current_token().clone();

    Ok(Expr::Bool(BoolExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    parse_unary_expr(parser, BindingPower::Prefix)
}

/// `not`/`!` bind looser than comparisons: `not a == b` negates the comparison.
pub fn parse_not_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    parse_unary_expr(parser, BindingPower::Not)
}

fn parse_unary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParsingError> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, bp)?;

    Ok(Expr::Prefix(PrefixExpr {
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, ParsingError> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen, ErrorImpl::expected("`)`"))?;

    Ok(expr)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, ParsingError> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen, ErrorImpl::expected("`)`"))?;
    }

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    let token = parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(
        TokenKind::OpenCurly,
        ErrorImpl::MissingBranchBlock {
            branch: String::from("main if"),
        },
    )?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(
            TokenKind::OpenCurly,
            ErrorImpl::MissingBranchBlock {
                branch: String::from("else"),
            },
        )?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If(Box::new(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    })))
}

/// Parses `fn name(a, b) { ... }` or `@fn name(a, b) { ... }`; the name is optional.
pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, ParsingError> {
    let token = parser.current_token().clone();
    let is_pipeline_stage = token.kind == TokenKind::PipeFn;

    let name = if parser.peek_token_kind() == TokenKind::Identifier {
        parser.advance();
        Some(Identifier::from_token(parser.current_token().clone()))
    } else {
        None
    };

    parser.expect_peek(
        TokenKind::OpenParen,
        ErrorImpl::expected("function name or `(`"),
    )?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(
        TokenKind::OpenCurly,
        ErrorImpl::expected("`{` at the start of function body"),
    )?;
    let body = parse_block(parser)?;

    Ok(Expr::Function(Box::new(FunctionLiteral {
        token,
        name,
        parameters,
        body,
        is_pipeline_stage,
    })))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParsingError> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    let first = parser.expect_peek(
        TokenKind::Identifier,
        ErrorImpl::expected("parameter identifier"),
    )?;
    parameters.push(Identifier::from_token(first));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        let parameter = parser.expect_peek(
            TokenKind::Identifier,
            ErrorImpl::expected("parameter identifier"),
        )?;
        parameters.push(Identifier::from_token(parameter));
    }

    parser.expect_peek(TokenKind::CloseParen, ErrorImpl::expected("`)`"))?;

    Ok(parameters)
}
