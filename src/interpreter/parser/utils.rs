use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            binary::parse_expression,
            core::{ClassTable, ParseResult},
        },
    },
};

/// Consumes the current token when it equals `token`, failing otherwise.
pub(in crate::interpreter::parser) fn expect(lexer: &mut Lexer, token: &Token) -> ParseResult<()> {
    if lexer.current_token() == token {
        lexer.next_token()?;
        return Ok(());
    }
    Err(ParseError::ExpectedToken { expected: token.to_string(),
                                    found:    lexer.current_token().to_string(),
                                    line:     lexer.line(), })
}

/// Consumes the current token when it is the punctuation character
/// `expected`, failing otherwise.
pub(in crate::interpreter::parser) fn expect_char(lexer: &mut Lexer,
                                                  expected: char)
                                                  -> ParseResult<()> {
    if *lexer.current_token() == Token::Char(expected) {
        lexer.next_token()?;
        return Ok(());
    }
    Err(ParseError::ExpectedToken { expected: format!("'{expected}'"),
                                    found:    lexer.current_token().to_string(),
                                    line:     lexer.line(), })
}

/// Consumes and returns the current identifier, failing on any other token.
pub(in crate::interpreter::parser) fn expect_identifier(lexer: &mut Lexer)
                                                        -> ParseResult<String> {
    match lexer.current_token() {
        Token::Id(name) => {
            let name = name.clone();
            lexer.next_token()?;
            Ok(name)
        },
        token => Err(ParseError::ExpectedIdentifier { found: token.to_string(),
                                                      line:  lexer.line(), }),
    }
}

/// Parses a parenthesized, comma-separated argument list, including both
/// parentheses. An immediately encountered `)` produces an empty list.
///
/// Grammar: `args := "(" (expression ("," expression)*)? ")"`
pub(in crate::interpreter::parser) fn parse_arguments(lexer: &mut Lexer,
                                                      classes: &ClassTable)
                                                      -> ParseResult<Vec<Statement>> {
    expect_char(lexer, '(')?;
    let mut args = Vec::new();
    if *lexer.current_token() == Token::Char(')') {
        lexer.next_token()?;
        return Ok(args);
    }
    loop {
        args.push(parse_expression(lexer, classes)?);
        match lexer.current_token() {
            Token::Char(',') => {
                lexer.next_token()?;
            },
            Token::Char(')') => {
                lexer.next_token()?;
                break;
            },
            token => {
                return Err(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                       found:    token.to_string(),
                                                       line:     lexer.line(), });
            },
        }
    }
    Ok(args)
}
