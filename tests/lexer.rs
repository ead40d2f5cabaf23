use minipy::interpreter::lexer::{Lexer, Token};

fn lex(source: &str) -> Vec<Token> {
    let mut lexer =
        Lexer::new(source).unwrap_or_else(|e| panic!("Lexing {source:?} failed: {e}"));
    let mut tokens = vec![lexer.current_token().clone()];
    while *lexer.current_token() != Token::Eof {
        let token = lexer.next_token().expect("token stream ended in an error");
        tokens.push(token.clone());
    }
    tokens
}

fn lex_fails(source: &str) -> bool {
    let Ok(mut lexer) = Lexer::new(source) else {
        return true;
    };
    while *lexer.current_token() != Token::Eof {
        if lexer.next_token().is_err() {
            return true;
        }
    }
    false
}

fn id(name: &str) -> Token {
    Token::Id(name.to_string())
}

#[test]
fn simple_assignment() {
    assert_eq!(lex("x = 42\n"),
               vec![id("x"), Token::Char('='), Token::Number(42), Token::Newline, Token::Eof]);
}

#[test]
fn keywords_are_recognized() {
    assert_eq!(lex("class return if else def print and or not None True False\n"),
               vec![Token::Class,
                    Token::Return,
                    Token::If,
                    Token::Else,
                    Token::Def,
                    Token::Print,
                    Token::And,
                    Token::Or,
                    Token::Not,
                    Token::None,
                    Token::True,
                    Token::False,
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(lex("classy x_1 _underscore\n"),
               vec![id("classy"), id("x_1"), id("_underscore"), Token::Newline, Token::Eof]);
}

#[test]
fn string_escapes_are_processed() {
    assert_eq!(lex(r"'hello\n'"),
               vec![Token::Str("hello\n".to_string()), Token::Newline, Token::Eof]);
    assert_eq!(lex(r"'a\tb'"),
               vec![Token::Str("a\tb".to_string()), Token::Newline, Token::Eof]);
    assert_eq!(lex(r#""say \"hi\"""#),
               vec![Token::Str("say \"hi\"".to_string()), Token::Newline, Token::Eof]);
    assert_eq!(lex(r"'it\'s'"),
               vec![Token::Str("it's".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn unknown_escapes_keep_their_backslash() {
    assert_eq!(lex(r"'a\qb'"),
               vec![Token::Str("a\\qb".to_string()), Token::Newline, Token::Eof]);
    assert_eq!(lex(r"'a\\b'"),
               vec![Token::Str("a\\\\b".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn comparison_operators() {
    assert_eq!(lex("a == b != c <= d >= e\n"),
               vec![id("a"),
                    Token::Eq,
                    id("b"),
                    Token::NotEq,
                    id("c"),
                    Token::LessOrEq,
                    id("d"),
                    Token::GreaterOrEq,
                    id("e"),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn single_characters_stay_single() {
    assert_eq!(lex("a < b > c = d ! e\n"),
               vec![id("a"),
                    Token::Char('<'),
                    id("b"),
                    Token::Char('>'),
                    id("c"),
                    Token::Char('='),
                    id("d"),
                    Token::Char('!'),
                    id("e"),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn indent_and_dedent_are_emitted() {
    assert_eq!(lex("if x:\n  y = 1\n  z = 2\nq = 3\n"),
               vec![Token::If,
                    id("x"),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    id("y"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    id("z"),
                    Token::Char('='),
                    Token::Number(2),
                    Token::Newline,
                    Token::Dedent,
                    id("q"),
                    Token::Char('='),
                    Token::Number(3),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn nested_blocks_dedent_one_level_per_token() {
    assert_eq!(lex("if a:\n  if b:\n    x = 1\n"),
               vec![Token::If,
                    id("a"),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    Token::If,
                    id("b"),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    id("x"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    Token::Dedent,
                    Token::Dedent,
                    Token::Eof]);
}

#[test]
fn blank_and_comment_lines_do_not_affect_indentation() {
    assert_eq!(lex("x = 1\n\n   \n# comment\n   # indented comment\ny = 2\n"),
               vec![id("x"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    id("y"),
                    Token::Char('='),
                    Token::Number(2),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn trailing_comments_are_skipped() {
    assert_eq!(lex("x = 1 # set x\n"),
               vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn newline_is_synthesized_at_end_of_input() {
    assert_eq!(lex("x = 1"),
               vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn open_blocks_are_closed_at_end_of_input() {
    assert_eq!(lex("if x:\n  y = 1"),
               vec![Token::If,
                    id("x"),
                    Token::Char(':'),
                    Token::Newline,
                    Token::Indent,
                    id("y"),
                    Token::Char('='),
                    Token::Number(1),
                    Token::Newline,
                    Token::Dedent,
                    Token::Eof]);
}

#[test]
fn empty_input_is_a_single_eof() {
    assert_eq!(lex(""), vec![Token::Eof]);
    assert_eq!(lex("\n\n   \n"), vec![Token::Eof]);
    assert_eq!(lex("# only a comment"), vec![Token::Eof]);
}

#[test]
fn leading_indentation_of_the_first_line_is_ignored() {
    assert_eq!(lex("  x = 1\n"),
               vec![id("x"), Token::Char('='), Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn indents_and_dedents_are_balanced() {
    let sources = ["if a:\n  x = 1\n",
                   "if a:\n  if b:\n    x = 1\n  y = 2\n",
                   "class A:\n  def f():\n    return 1\nx = 1\n",
                   "if a:\n  x = 1"];
    for source in sources {
        let tokens = lex(source);
        let indents = tokens.iter().filter(|t| **t == Token::Indent).count();
        let dedents = tokens.iter().filter(|t| **t == Token::Dedent).count();
        assert_eq!(indents, dedents, "unbalanced blocks in {source:?}");
    }
}

#[test]
fn programs_end_with_newline_then_eof() {
    for source in ["x = 1", "x = 1\n", "print 'hi'  # bye"] {
        let tokens = lex(source);
        assert_eq!(&tokens[tokens.len() - 2..], &[Token::Newline, Token::Eof]);
    }
}

#[test]
fn odd_indentation_is_an_error() {
    assert!(lex_fails("if x:\n   y = 1\n"));
    assert!(lex_fails("if x:\n  y = 1\n z = 2\n"));
}

#[test]
fn misaligned_dedent_is_an_error() {
    assert!(lex_fails("if x:\n    y = 1\n  z = 2\n"));
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(lex_fails("x = 'oops\n"));
}

#[test]
fn overflowing_number_is_an_error() {
    assert!(lex_fails("x = 99999999999999999999999999\n"));
}
