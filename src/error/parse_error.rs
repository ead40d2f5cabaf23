use crate::error::LexerError;

#[derive(Debug)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The lexer rejected the input while the parser was pulling tokens.
    Lexer(LexerError),
    /// Found a token that no grammar rule accepts at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// A description of the required token.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An identifier was required but something else was found.
    ExpectedIdentifier {
        /// The token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of an assignment is not a name or a dotted field.
    InvalidAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An instantiation or parent-class reference names a class that has not
    /// been declared.
    UnknownClass {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl From<LexerError> for ParseError {
    fn from(error: LexerError) -> Self {
        Self::Lexer(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexer(error) => write!(f, "{error}"),
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::ExpectedIdentifier { found, line } => {
                write!(f, "Error on line {line}: Expected identifier, found {found}.")
            },
            Self::InvalidAssignment { line } => write!(f,
                                                       "Error on line {line}: The target of an assignment must be a name or a field."),
            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: Unknown class '{name}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
