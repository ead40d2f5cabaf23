/// Lexical errors.
///
/// Defines the error type raised while tokenizing source code. Lexer errors
/// cover malformed indentation and lexemes no token rule accepts.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream
/// into an abstract syntax tree. Parse errors include unexpected tokens,
/// missing delimiters, and references to undeclared classes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, type mismatches in operators, missing
/// methods, and division by zero.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
