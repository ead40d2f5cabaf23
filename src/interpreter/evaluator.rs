/// Arithmetic and comparison nodes.
///
/// Implements addition (numbers, strings and `__add__` delegation),
/// subtraction, multiplication, truncating division, and the comparison
/// node.
pub mod binary;
/// Method calls, instantiation and `str(...)`.
///
/// Evaluates call arguments left to right, dispatches method calls on class
/// instances, allocates fresh instances and runs matching `__init__`
/// constructors, and renders values to strings.
pub mod call;
/// Core evaluation logic.
///
/// Contains the evaluation context carrying the output sink, the unwinding
/// channel shared by runtime errors and return signals, and the `execute`
/// entry point dispatching over every AST node.
pub mod core;
/// Short-circuit logic nodes.
///
/// Implements `and`, `or` and `not` over value truthiness.
pub mod logic;
/// Statement-position nodes.
///
/// Implements assignments, variable and field access, `print`, class
/// definitions, conditionals and statement sequences.
pub mod statement;
