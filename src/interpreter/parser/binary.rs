use crate::{
    ast::{Comparator, Statement},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            core::{ClassTable, ParseResult},
            unary::{parse_factor, parse_not_test},
        },
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, short-circuit `or`, and descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := and_test ("or" and_test)*`
///
/// # Errors
/// Returns a `ParseError` when the expression is malformed.
pub fn parse_expression(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let mut node = parse_logical_and(lexer, classes)?;
    while *lexer.current_token() == Token::Or {
        lexer.next_token()?;
        let rhs = parse_logical_and(lexer, classes)?;
        node = Statement::Or { lhs: Box::new(node),
                               rhs: Box::new(rhs), };
    }
    Ok(node)
}

/// Parses a conjunction.
///
/// Grammar: `and_test := not_test ("and" not_test)*`
fn parse_logical_and(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let mut node = parse_not_test(lexer, classes)?;
    while *lexer.current_token() == Token::And {
        lexer.next_token()?;
        let rhs = parse_not_test(lexer, classes)?;
        node = Statement::And { lhs: Box::new(node),
                                rhs: Box::new(rhs), };
    }
    Ok(node)
}

/// Parses a comparison: a sum optionally followed by exactly one comparison
/// operator and another sum. Comparisons do not chain.
///
/// Grammar: `comparison := sum [("==" | "!=" | "<" | ">" | "<=" | ">=") sum]`
pub(in crate::interpreter::parser) fn parse_comparison(lexer: &mut Lexer,
                                                       classes: &ClassTable)
                                                       -> ParseResult<Statement> {
    let lhs = parse_sum(lexer, classes)?;
    let cmp = match lexer.current_token() {
        Token::Eq => Comparator::Equal,
        Token::NotEq => Comparator::NotEqual,
        Token::LessOrEq => Comparator::LessOrEqual,
        Token::GreaterOrEq => Comparator::GreaterOrEqual,
        Token::Char('<') => Comparator::Less,
        Token::Char('>') => Comparator::Greater,
        _ => return Ok(lhs),
    };
    let line = lexer.line();
    lexer.next_token()?;
    let rhs = parse_sum(lexer, classes)?;
    Ok(Statement::Comparison { cmp,
                               lhs: Box::new(lhs),
                               rhs: Box::new(rhs),
                               line })
}

/// Parses a sum of terms.
///
/// Grammar: `sum := term (("+" | "-") term)*`
fn parse_sum(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let mut node = parse_term(lexer, classes)?;
    loop {
        let add = match lexer.current_token() {
            Token::Char('+') => true,
            Token::Char('-') => false,
            _ => return Ok(node),
        };
        let line = lexer.line();
        lexer.next_token()?;
        let rhs = parse_term(lexer, classes)?;
        node = if add {
            Statement::Add { lhs: Box::new(node),
                             rhs: Box::new(rhs),
                             line }
        } else {
            Statement::Sub { lhs: Box::new(node),
                             rhs: Box::new(rhs),
                             line }
        };
    }
}

/// Parses a product of factors.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
fn parse_term(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let mut node = parse_factor(lexer, classes)?;
    loop {
        let mult = match lexer.current_token() {
            Token::Char('*') => true,
            Token::Char('/') => false,
            _ => return Ok(node),
        };
        let line = lexer.line();
        lexer.next_token()?;
        let rhs = parse_factor(lexer, classes)?;
        node = if mult {
            Statement::Mult { lhs: Box::new(node),
                              rhs: Box::new(rhs),
                              line }
        } else {
            Statement::Div { lhs: Box::new(node),
                             rhs: Box::new(rhs),
                             line }
        };
    }
}
