use std::collections::HashMap;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            statement::{parse_simple_statement, parse_statement},
            utils::expect,
        },
        runtime::class::Class,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The classes declared so far during parsing.
///
/// Instantiations are resolved while parsing: `X(...)` is only an
/// instantiation when `X` has already been declared, and `class B(A)`
/// requires `A` here. The table maps class names to the class objects the
/// parser builds out of their method definitions.
pub type ClassTable = HashMap<String, Class>;

/// Parses a complete program into a single compound statement.
///
/// The token stream is pulled from the lexer one token at a time; the lexer
/// guarantees a terminal `Eof` and balanced `Indent`/`Dedent` pairs.
///
/// # Errors
/// Returns a `ParseError` when the program violates the grammar, and
/// forwards lexical errors encountered while pulling tokens.
///
/// # Example
/// ```
/// use minipy::interpreter::{lexer::Lexer, parser::core::parse_program};
///
/// let mut lexer = Lexer::new("x = 1\nprint x + 2").unwrap();
/// assert!(parse_program(&mut lexer).is_ok());
/// ```
pub fn parse_program(lexer: &mut Lexer) -> ParseResult<Statement> {
    let mut classes = ClassTable::new();
    let mut statements = Vec::new();
    loop {
        match lexer.current_token() {
            Token::Eof => break,
            Token::Newline => {
                lexer.next_token()?;
            },
            _ => statements.push(parse_statement(lexer, &mut classes)?),
        }
    }
    Ok(Statement::Compound { statements })
}

/// Parses a suite: the body following a colon.
///
/// A suite is either a single simple statement on the same line, or a
/// newline followed by an indented block of statements. The trailing
/// `Newline` or `Dedent` is consumed.
///
/// # Errors
/// Returns a `ParseError` when the suite is malformed.
pub fn parse_suite(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Statement> {
    if *lexer.current_token() == Token::Newline {
        lexer.next_token()?;
        expect(lexer, &Token::Indent)?;
        let mut statements = Vec::new();
        while *lexer.current_token() != Token::Dedent {
            statements.push(parse_statement(lexer, classes)?);
        }
        lexer.next_token()?;
        return Ok(Statement::Compound { statements });
    }
    let statement = parse_simple_statement(lexer, classes)?;
    expect(lexer, &Token::Newline)?;
    Ok(statement)
}
