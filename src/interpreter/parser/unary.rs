use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            binary::{parse_comparison, parse_expression},
            core::{ClassTable, ParseResult},
            utils::{expect_char, expect_identifier, parse_arguments},
        },
        runtime::object::{ObjectHolder, Value},
    },
};

/// Parses a negated test.
///
/// Grammar: `not_test := "not" not_test | comparison`
pub(in crate::interpreter::parser) fn parse_not_test(lexer: &mut Lexer,
                                                     classes: &ClassTable)
                                                     -> ParseResult<Statement> {
    if *lexer.current_token() == Token::Not {
        lexer.next_token()?;
        let arg = parse_not_test(lexer, classes)?;
        return Ok(Statement::Not { arg: Box::new(arg) });
    }
    parse_comparison(lexer, classes)
}

/// Parses a factor, handling unary minus.
///
/// `-x` parses as the subtraction `0 - x`, so negation shares the checked
/// arithmetic of `Sub`.
///
/// Grammar: `factor := "-" factor | postfix`
pub(in crate::interpreter::parser) fn parse_factor(lexer: &mut Lexer,
                                                   classes: &ClassTable)
                                                   -> ParseResult<Statement> {
    if *lexer.current_token() == Token::Char('-') {
        let line = lexer.line();
        lexer.next_token()?;
        let rhs = parse_factor(lexer, classes)?;
        let zero = Statement::Const { value: ObjectHolder::own(Value::Number(0)) };
        return Ok(Statement::Sub { lhs: Box::new(zero),
                                   rhs: Box::new(rhs),
                                   line });
    }
    parse_postfix(lexer, classes)
}

/// Parses a primary expression followed by any chain of method calls, such
/// as `Stack().push(1)`.
///
/// Grammar: `postfix := primary ("." id "(" args ")")*`
fn parse_postfix(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let mut node = parse_primary(lexer, classes)?;
    while *lexer.current_token() == Token::Char('.') {
        lexer.next_token()?;
        let line = lexer.line();
        let method = expect_identifier(lexer)?;
        if *lexer.current_token() != Token::Char('(') {
            return Err(ParseError::ExpectedToken { expected: "'('".to_string(),
                                                   found:    lexer.current_token().to_string(),
                                                   line:     lexer.line(), });
        }
        let args = parse_arguments(lexer, classes)?;
        node = Statement::MethodCall { object: Box::new(node),
                                       method,
                                       args,
                                       line };
    }
    Ok(node)
}

/// Parses a primary expression: a literal, a parenthesized expression, or a
/// name-led form (variable, field chain, method call, instantiation or
/// `str(...)`).
fn parse_primary(lexer: &mut Lexer, classes: &ClassTable) -> ParseResult<Statement> {
    let line = lexer.line();
    match lexer.current_token().clone() {
        Token::Number(value) => {
            lexer.next_token()?;
            Ok(Statement::Const { value: ObjectHolder::own(Value::Number(value)) })
        },
        Token::Str(value) => {
            lexer.next_token()?;
            Ok(Statement::Const { value: ObjectHolder::own(Value::Str(value)) })
        },
        Token::True => {
            lexer.next_token()?;
            Ok(Statement::Const { value: ObjectHolder::own(Value::Bool(true)) })
        },
        Token::False => {
            lexer.next_token()?;
            Ok(Statement::Const { value: ObjectHolder::own(Value::Bool(false)) })
        },
        Token::None => {
            lexer.next_token()?;
            Ok(Statement::Const { value: ObjectHolder::none() })
        },
        Token::Char('(') => {
            lexer.next_token()?;
            let expr = parse_expression(lexer, classes)?;
            expect_char(lexer, ')')?;
            Ok(expr)
        },
        Token::Id(first) => parse_name(lexer, classes, first, line),
        token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                   line }),
    }
}

/// Parses a name-led expression starting at an identifier.
///
/// The dotted chain is consumed greedily. A chain followed by parentheses
/// is a method call on the prefix; a single name followed by parentheses is
/// the `str(...)` builtin or, when the name is a declared class, an
/// instantiation. A bare chain reads a variable or field.
fn parse_name(lexer: &mut Lexer,
              classes: &ClassTable,
              first: String,
              line: usize)
              -> ParseResult<Statement> {
    lexer.next_token()?;
    let mut dotted_ids = vec![first];
    while *lexer.current_token() == Token::Char('.') {
        lexer.next_token()?;
        let id = expect_identifier(lexer)?;
        if *lexer.current_token() == Token::Char('(') {
            let args = parse_arguments(lexer, classes)?;
            let object = Statement::Variable { dotted_ids, line };
            return Ok(Statement::MethodCall { object: Box::new(object),
                                              method: id,
                                              args,
                                              line });
        }
        dotted_ids.push(id);
    }
    if *lexer.current_token() == Token::Char('(')
       && let [name] = dotted_ids.as_slice()
    {
        if name == "str" {
            expect_char(lexer, '(')?;
            let arg = parse_expression(lexer, classes)?;
            expect_char(lexer, ')')?;
            return Ok(Statement::Stringify { arg: Box::new(arg),
                                             line });
        }
        let Some(class) = classes.get(name) else {
            return Err(ParseError::UnknownClass { name: name.clone(),
                                                  line });
        };
        let class = class.clone();
        let args = parse_arguments(lexer, classes)?;
        return Ok(Statement::NewInstance { class, args, line });
    }
    Ok(Statement::Variable { dotted_ids, line })
}
