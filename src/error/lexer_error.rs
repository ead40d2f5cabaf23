#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source code.
pub enum LexerError {
    /// A line is indented by an odd number of spaces, or a dedent does not
    /// return to an enclosing indentation level.
    UnexpectedIndentation {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input contains a lexeme no token rule accepts, such as an
    /// unterminated string literal or an integer literal that overflows.
    InvalidToken {
        /// The rejected piece of input.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedIndentation { line } => {
                write!(f, "Error on line {line}: Unexpected indentation.")
            },
            Self::InvalidToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognized token '{token}'.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
