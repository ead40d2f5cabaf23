//! # minipy
//!
//! minipy is a tree-walking interpreter for a small dynamically-typed,
//! indentation-sensitive, object-oriented scripting language. Programs are
//! read as UTF-8 text, tokenized, parsed into an abstract syntax tree, and
//! executed by evaluating that tree against an environment of name
//! bindings. Output is written to a caller-supplied sink.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, Unwind, execute},
        lexer::Lexer,
        parser::core::parse_program,
        runtime::object::Closure,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source lines to nodes that can fail at runtime.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries line numbers and
/// detailed messages for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime
/// object model, and error handling to provide a complete interpreter. It
/// underlies the public [`run`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, runtime, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets a program, writing its output to the given sink.
///
/// The source is tokenized and parsed in full, then the resulting tree is
/// executed against an initially empty closure. Everything the program
/// prints goes to `output`; nothing is written on failure beyond what was
/// printed before the error.
///
/// # Errors
/// Returns the first lexical, parse or runtime error encountered. A
/// `return` statement reaching the top level is reported as a runtime
/// error.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// minipy::run("print 1 + 2", &mut output).unwrap();
/// assert_eq!(output, b"3\n");
///
/// // An unknown variable is a runtime error.
/// let mut output = Vec::new();
/// assert!(minipy::run("print x", &mut output).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn io::Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut lexer = Lexer::new(source)?;
    let program = parse_program(&mut lexer)?;
    let mut closure = Closure::new();
    let mut context = Context::new(output);
    match execute(&program, &mut closure, &mut context) {
        Ok(_) => Ok(()),
        Err(Unwind::Return { line, .. }) => {
            Err(Box::new(RuntimeError::ReturnOutsideMethod { line }))
        },
        Err(Unwind::Error(error)) => Err(Box::new(error)),
    }
}
