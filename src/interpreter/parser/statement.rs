use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            binary::parse_expression,
            core::{ClassTable, ParseResult, parse_suite},
            utils::{expect, expect_char, expect_identifier},
        },
        runtime::class::{Class, Method},
    },
};

/// Parses one statement: a class definition, a conditional, or a simple
/// statement terminated by a newline.
///
/// # Errors
/// Returns a `ParseError` when the statement is malformed.
pub fn parse_statement(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Statement> {
    match lexer.current_token() {
        Token::Class => parse_class_definition(lexer, classes),
        Token::If => parse_if_else(lexer, classes),
        _ => {
            let statement = parse_simple_statement(lexer, classes)?;
            expect(lexer, &Token::Newline)?;
            Ok(statement)
        },
    }
}

/// Parses a simple (single-line) statement: `print`, `return`, an
/// assignment, a field assignment, or a bare expression. The terminating
/// newline is left for the caller.
///
/// # Errors
/// Returns a `ParseError` when the statement is malformed.
pub(in crate::interpreter::parser) fn parse_simple_statement(lexer: &mut Lexer,
                                                             classes: &mut ClassTable)
                                                             -> ParseResult<Statement> {
    match lexer.current_token() {
        Token::Print => parse_print(lexer, classes),
        Token::Return => {
            let line = lexer.line();
            lexer.next_token()?;
            let statement = parse_expression(lexer, classes)?;
            Ok(Statement::Return { statement: Box::new(statement),
                                   line })
        },
        _ => {
            let line = lexer.line();
            let expr = parse_expression(lexer, classes)?;
            if *lexer.current_token() == Token::Char('=') {
                lexer.next_token()?;
                let rv = parse_expression(lexer, classes)?;
                return into_assignment(expr, rv, line);
            }
            Ok(expr)
        },
    }
}

/// Turns a parsed target expression and right-hand side into an assignment
/// node: a plain binding for a single name, a field assignment for a
/// dotted chain.
fn into_assignment(target: Statement, rv: Statement, line: usize) -> ParseResult<Statement> {
    let Statement::Variable { mut dotted_ids,
                              line: target_line, } = target
    else {
        return Err(ParseError::InvalidAssignment { line });
    };
    let Some(field_name) = dotted_ids.pop() else {
        return Err(ParseError::InvalidAssignment { line });
    };
    if dotted_ids.is_empty() {
        return Ok(Statement::Assignment { var: field_name,
                                          rv:  Box::new(rv), });
    }
    Ok(Statement::FieldAssignment { object: Box::new(Statement::Variable { dotted_ids,
                                                                           line: target_line, }),
                                    field_name,
                                    rv: Box::new(rv) })
}

/// Parses a `print` statement: zero or more comma-separated expressions up
/// to the end of the line.
fn parse_print(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Statement> {
    let line = lexer.line();
    lexer.next_token()?;
    let mut args = Vec::new();
    if *lexer.current_token() != Token::Newline {
        loop {
            args.push(parse_expression(lexer, classes)?);
            if *lexer.current_token() != Token::Char(',') {
                break;
            }
            lexer.next_token()?;
        }
    }
    Ok(Statement::Print { args, line })
}

/// Parses a class definition.
///
/// Syntax:
/// ```text
///     class Name:
///     class Name(Parent):
/// ```
/// followed by an indented block of method definitions. The parent, when
/// given, must already be declared. The finished class is recorded in the
/// class table so later code can instantiate it.
fn parse_class_definition(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Statement> {
    lexer.next_token()?;
    let name = expect_identifier(lexer)?;
    let parent = if *lexer.current_token() == Token::Char('(') {
        lexer.next_token()?;
        let parent_line = lexer.line();
        let parent_name = expect_identifier(lexer)?;
        expect_char(lexer, ')')?;
        let Some(parent) = classes.get(&parent_name) else {
            return Err(ParseError::UnknownClass { name: parent_name,
                                                  line: parent_line, });
        };
        Some(parent.clone())
    } else {
        None
    };
    expect_char(lexer, ':')?;
    expect(lexer, &Token::Newline)?;
    expect(lexer, &Token::Indent)?;
    let mut methods = Vec::new();
    while *lexer.current_token() == Token::Def {
        methods.push(parse_method(lexer, classes)?);
    }
    expect(lexer, &Token::Dedent)?;
    let class = Class::new(name.clone(), methods, parent);
    classes.insert(name, class.clone());
    Ok(Statement::ClassDefinition { class })
}

/// Parses one method definition inside a class body. The parsed suite is
/// wrapped in a `MethodBody` node so that `return` stops there.
fn parse_method(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Method> {
    lexer.next_token()?;
    let name = expect_identifier(lexer)?;
    expect_char(lexer, '(')?;
    let mut formal_params = Vec::new();
    if *lexer.current_token() != Token::Char(')') {
        loop {
            formal_params.push(expect_identifier(lexer)?);
            if *lexer.current_token() != Token::Char(',') {
                break;
            }
            lexer.next_token()?;
        }
    }
    expect_char(lexer, ')')?;
    expect_char(lexer, ':')?;
    let body = parse_suite(lexer, classes)?;
    Ok(Method { name,
                formal_params,
                body: Statement::MethodBody { body: Box::new(body) } })
}

/// Parses an `if` statement with an optional `else` branch.
fn parse_if_else(lexer: &mut Lexer, classes: &mut ClassTable) -> ParseResult<Statement> {
    lexer.next_token()?;
    let condition = parse_expression(lexer, classes)?;
    expect_char(lexer, ':')?;
    let if_body = parse_suite(lexer, classes)?;
    let else_body = if *lexer.current_token() == Token::Else {
        lexer.next_token()?;
        expect_char(lexer, ':')?;
        Some(Box::new(parse_suite(lexer, classes)?))
    } else {
        None
    };
    Ok(Statement::IfElse { condition: Box::new(condition),
                           if_body: Box::new(if_body),
                           else_body })
}
