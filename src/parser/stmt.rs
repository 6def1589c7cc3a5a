use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. Kinds without a statement handler start
/// an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        name: name_token.literal,
        span: name_token.span,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.advance_if_peek(TokenKind::Semicolon);

    Ok(Stmt::Let(LetStmt {
        name,
        value,
        span: parser.span_from(start),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.advance_if_peek(TokenKind::Semicolon);

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    parser.advance_if_peek(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        span: parser.span_from(start),
    }))
}

/// Parses `{ ... }` with the current token on the opening brace, leaving it
/// on the closing one.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.get_position();
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_token().is(TokenKind::CloseCurly) {
        if parser.current_token().is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedEof {
                    expected: TokenKind::CloseCurly,
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}
