/// Binary expression parsing.
///
/// Implements the precedence chain from short-circuit `or` down through
/// `and`, comparisons, sums and products.
pub mod binary;
/// Program and suite parsing.
///
/// Contains the `parse_program` entry point and the parsing of suites, the
/// bodies that follow a colon either on the same line or as an indented
/// block.
pub mod core;
/// Statement parsing.
///
/// Handles simple statements (assignments, `print`, `return`, expression
/// statements), class definitions with their methods, and conditionals.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Implements `not`, unary minus, literals, parenthesized expressions,
/// dotted name chains, instantiations, method calls and the `str(...)`
/// builtin.
pub mod unary;
/// Parsing utilities.
///
/// Small helpers shared across the parser: expecting a specific token,
/// reading an identifier, and parsing parenthesized argument lists.
pub mod utils;
