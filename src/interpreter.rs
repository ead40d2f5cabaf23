/// The evaluator module executes AST nodes and produces program output.
///
/// The evaluator walks the AST recursively, threading a closure of name
/// bindings and a context holding the output sink through every node. It
/// implements arithmetic and comparison dispatch, short-circuit logic,
/// method calls and the return signal.
///
/// # Responsibilities
/// - Evaluates every AST node to an object holder.
/// - Handles closures, field access and control flow.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens. It
/// is indentation-aware: changes in leading whitespace are turned into
/// synthetic `Indent` and `Dedent` tokens, and every non-empty program is
/// terminated by `Newline` followed by `Eof`.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Synthesizes block-structure tokens from leading whitespace.
/// - Reports lexical errors for malformed indentation or input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs an AST that
/// represents the syntactic structure of the program. Classes are resolved
/// while parsing, so instantiations refer to their class objects directly.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with location info.
/// - Builds class objects out of their method definitions.
pub mod parser;
/// The runtime module defines the object model of the language.
///
/// This module declares the value types used during execution, the object
/// holder with its empty state, classes with single-inheritance method
/// lookup, class instances with their field closures, and the comparison
/// protocol delegating to special methods.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `ObjectHolder` handle.
/// - Implements method resolution and invocation.
/// - Implements equality and ordering with dunder-method fallback.
pub mod runtime;
