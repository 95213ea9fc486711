// csvb_parser - C# lexing and parsing for the csvb converter
//! Turns C# source text into the `csvb_ast` tree.
//!
//! Three entry points mirror the converter's ordered-fallback contract: a
//! parse succeeds only when it consumes the entire input with no
//! diagnostics, so callers can try expression, then statement, then full
//! compilation unit.

pub mod error;
pub mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{is_csharp_keyword, tokenize};

use csvb_ast::{CompilationUnit, Expression, Statement, Token, TokenKind};
use parser::Parser;

fn checked_tokens(source: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = tokenize(source);
    if let Some(bad) = tokens.iter().find(|token| token.kind == TokenKind::Error) {
        return Err(ParseError::UnrecognizedInput {
            text: bad.text.clone(),
            span: bad.span,
        });
    }
    Ok(tokens)
}

/// Parse the whole input as a single expression.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(checked_tokens(source)?);
    let expr = parser.parse_expression()?;
    parser.expect_eof("expression")?;
    Ok(expr)
}

/// Parse the whole input as a single statement.
pub fn parse_statement(source: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(checked_tokens(source)?);
    let statement = parser.parse_statement()?;
    parser.expect_eof("statement")?;
    Ok(statement)
}

/// Parse the whole input as a compilation unit.
pub fn parse_compilation_unit(source: &str) -> Result<CompilationUnit, ParseError> {
    let mut parser = Parser::new(checked_tokens(source)?);
    parser.parse_compilation_unit()
}

#[cfg(test)]
mod tests;
