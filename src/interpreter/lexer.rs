use logos::Logos;

use crate::error::LexerError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexerError>;

/// Additional information carried by the raw lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A raw lexeme recognized directly in the character stream.
///
/// Raw tokens know nothing about block structure: runs of spaces and
/// newlines are ordinary tokens here, and no `Indent`/`Dedent` exists at
/// this layer. [`Lexer`] consumes this stream and synthesizes the
/// indentation-aware [`Token`] stream from it.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Integer literal tokens, such as `42`. Literals that overflow a 64-bit
    /// signed integer are rejected.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),
    /// `class`
    #[token("class")]
    Class,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `None`
    #[token("None")]
    None,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// Identifier tokens; variable, class or method names such as `x` or
    /// `__init__`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),
    /// String literal tokens, single- or double-quoted, with escapes
    /// processed.
    #[regex(r"'([^'\\\n]|\\[^\n])*'", unescape)]
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, unescape)]
    Str(String),
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LessOrEq,
    /// `>=`
    #[token(">=")]
    GreaterOrEq,
    /// A line break.
    #[token("\n", |lex| { lex.extras.line += 1; })]
    Newline,
    /// A run of consecutive spaces, with its length. Significant at the
    /// start of a line, skipped elsewhere.
    #[regex(r" +", |lex| lex.slice().len())]
    Spaces(usize),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Any single character not recognized by another rule. Quotes are
    /// excluded so that a stray quote is a lexical error rather than a
    /// `Char` token.
    #[regex(r#"[^'"\n]"#, |lex| lex.slice().chars().next(), priority = 1)]
    Char(char),
}

/// Processes the escape sequences of a quoted string literal.
///
/// The surrounding quotes are stripped. `\'` and `\"` produce the quote
/// character, `\n` a newline and `\t` a tab; any other escaped character is
/// kept together with its backslash.
fn unescape(lex: &logos::Lexer<RawToken>) -> String {
    let quoted = lex.slice();
    let mut result = String::with_capacity(quoted.len());
    let mut chars = quoted[1..quoted.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            Option::None => result.push('\\'),
        }
    }
    result
}

/// Represents a lexical token as seen by the parser.
///
/// In addition to the lexemes recognized in the character stream, this
/// stream contains the synthesized block-structure tokens: `Indent` and
/// `Dedent` mark a change of indentation level, every non-empty program
/// ends with `Newline` followed by `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal, such as `42`.
    Number(i64),
    /// Identifier, such as `x` or `__init__`.
    Id(String),
    /// String literal with escapes already processed.
    Str(String),
    /// Any single punctuation character not otherwise matched, such as `+`
    /// or `:`.
    Char(char),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// End of a logical line.
    Newline,
    /// The start of an indented block.
    Indent,
    /// The end of an indented block.
    Dedent,
    /// End of input.
    Eof,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number{{{value}}}"),
            Self::Id(name) => write!(f, "Id{{{name}}}"),
            Self::Str(value) => write!(f, "Str{{{value}}}"),
            Self::Char(c) => write!(f, "Char{{{c}}}"),
            Self::Class => write!(f, "Class"),
            Self::Return => write!(f, "Return"),
            Self::If => write!(f, "If"),
            Self::Else => write!(f, "Else"),
            Self::Def => write!(f, "Def"),
            Self::Print => write!(f, "Print"),
            Self::And => write!(f, "And"),
            Self::Or => write!(f, "Or"),
            Self::Not => write!(f, "Not"),
            Self::None => write!(f, "None"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Newline => write!(f, "Newline"),
            Self::Indent => write!(f, "Indent"),
            Self::Dedent => write!(f, "Dedent"),
            Self::Eof => write!(f, "Eof"),
            Self::Eq => write!(f, "Eq"),
            Self::NotEq => write!(f, "NotEq"),
            Self::LessOrEq => write!(f, "LessOrEq"),
            Self::GreaterOrEq => write!(f, "GreaterOrEq"),
        }
    }
}

/// The indentation-aware lexer.
///
/// Wraps the raw token stream and maintains a stack of indentation levels,
/// initially holding level `0`. Whenever a new line is indented deeper than
/// the top of the stack an `Indent` token is synthesized; whenever it
/// returns to a shallower level, one `Dedent` per abandoned level. One
/// indentation level is two spaces; an odd number of leading spaces is a
/// lexical error. Blank lines and comment-only lines do not affect
/// indentation.
///
/// The stream is pulled by the parser: `current_token` returns the most
/// recently produced token and `next_token` advances. Construction reads
/// the first token eagerly, so `current_token` is always defined.
///
/// # Example
/// ```
/// use minipy::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 42").unwrap();
/// assert_eq!(*lexer.current_token(), Token::Id("x".to_string()));
/// assert_eq!(*lexer.next_token().unwrap(), Token::Char('='));
/// assert_eq!(*lexer.next_token().unwrap(), Token::Number(42));
/// assert_eq!(*lexer.next_token().unwrap(), Token::Newline);
/// assert_eq!(*lexer.next_token().unwrap(), Token::Eof);
/// ```
pub struct Lexer<'src> {
    raw:          logos::Lexer<'src, RawToken>,
    /// One-token lookahead over the raw stream; the inner `None` marks the
    /// end of input.
    peeked:       Option<Option<RawToken>>,
    indent_stack: Vec<usize>,
    line_indent:  usize,
    current:      Token,
    started:      bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text and reads the first
    /// token.
    ///
    /// # Errors
    /// Returns a `LexerError` if the first token is already malformed.
    pub fn new(source: &'src str) -> LexResult<Self> {
        let mut lexer = Self { raw:          RawToken::lexer_with_extras(source,
                                                                         LexerExtras { line: 1 }),
                               peeked:       None,
                               indent_stack: vec![0],
                               line_indent:  0,
                               current:      Token::Eof,
                               started:      false, };
        lexer.next_token()?;
        Ok(lexer)
    }

    /// Returns the most recently produced token.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the line number the lexer is currently positioned on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.raw.extras.line
    }

    /// Advances to the next token and returns it.
    ///
    /// Once `Eof` has been produced, every further call produces `Eof`
    /// again.
    ///
    /// # Errors
    /// Returns a `LexerError` on malformed indentation or on input no token
    /// rule accepts.
    pub fn next_token(&mut self) -> LexResult<&Token> {
        let token = self.advance()?;
        self.current = token;
        self.started = true;
        Ok(&self.current)
    }

    fn advance(&mut self) -> LexResult<Token> {
        self.skip_spaces()?;
        if self.line_indent != self.indent_level() {
            return self.indent_token();
        }
        let Some(raw) = self.take_raw()? else {
            return Ok(self.end_of_input());
        };
        Ok(match raw {
            RawToken::Number(value) => Token::Number(value),
            RawToken::Id(name) => Token::Id(name),
            RawToken::Str(value) => Token::Str(value),
            RawToken::Char(c) => Token::Char(c),
            RawToken::Class => Token::Class,
            RawToken::Return => Token::Return,
            RawToken::If => Token::If,
            RawToken::Else => Token::Else,
            RawToken::Def => Token::Def,
            RawToken::Print => Token::Print,
            RawToken::And => Token::And,
            RawToken::Or => Token::Or,
            RawToken::Not => Token::Not,
            RawToken::None => Token::None,
            RawToken::True => Token::True,
            RawToken::False => Token::False,
            RawToken::Eq => Token::Eq,
            RawToken::NotEq => Token::NotEq,
            RawToken::LessOrEq => Token::LessOrEq,
            RawToken::GreaterOrEq => Token::GreaterOrEq,
            RawToken::Newline => Token::Newline,
            // Runs of spaces never survive skip_spaces, and comments are
            // discarded by the raw layer.
            RawToken::Spaces(_) | RawToken::Comment => unreachable!(),
        })
    }

    /// Consumes spaces, comments and blank lines in front of the next
    /// token.
    ///
    /// When the previous token was a `Newline`, the number of spaces
    /// consumed determines the indentation of the new line. A line holding
    /// only spaces or a comment is treated as blank: its line break is
    /// swallowed and it leaves the indentation untouched.
    fn skip_spaces(&mut self) -> LexResult<()> {
        let mut skipped = 0;
        let is_new_line = self.started && self.current == Token::Newline;
        loop {
            while let Some(RawToken::Spaces(count)) = self.peek_raw()? {
                skipped += *count;
                self.take_raw()?;
            }
            if matches!(self.peek_raw()?, Some(RawToken::Newline))
               && (!self.started || self.current == Token::Newline)
            {
                self.take_raw()?;
                skipped = 0;
                continue;
            }
            break;
        }
        if is_new_line && skipped != self.indent_level() {
            if skipped % 2 != 0 {
                return Err(LexerError::UnexpectedIndentation { line: self.line() });
            }
            self.line_indent = skipped;
        }
        Ok(())
    }

    /// Produces one `Indent` or `Dedent` token, adjusting the indentation
    /// stack by a single level. When a line dedents across several levels,
    /// successive calls produce one `Dedent` each.
    fn indent_token(&mut self) -> LexResult<Token> {
        if self.line_indent > self.indent_level() {
            self.indent_stack.push(self.line_indent);
            return Ok(Token::Indent);
        }
        self.indent_stack.pop();
        if self.indent_level() < self.line_indent {
            return Err(LexerError::UnexpectedIndentation { line: self.line() });
        }
        Ok(Token::Dedent)
    }

    /// Decides the token to produce at the end of input. A synthetic
    /// `Newline` is emitted first unless the previous token already ends a
    /// line, so that every non-empty program ends with `Newline` before
    /// `Eof`.
    fn end_of_input(&self) -> Token {
        if !self.started || matches!(self.current, Token::Newline | Token::Eof | Token::Dedent) {
            Token::Eof
        } else {
            Token::Newline
        }
    }

    fn indent_level(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or_default()
    }

    fn peek_raw(&mut self) -> LexResult<Option<&RawToken>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.fetch_raw()?);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    fn take_raw(&mut self) -> LexResult<Option<RawToken>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.fetch_raw(),
        }
    }

    fn fetch_raw(&mut self) -> LexResult<Option<RawToken>> {
        match self.raw.next() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(())) => Err(LexerError::InvalidToken { token: self.raw.slice().to_string(),
                                                            line:  self.line(), }),
            None => Ok(None),
        }
    }
}
