#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an unbound variable or field.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A class instance was required but another kind of value was found.
    NotClassInstance {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a method a class does not provide with the given argument
    /// count.
    MethodNotImplemented {
        /// The name of the receiver's class.
        class:  String,
        /// The name of the requested method.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A comparison special method returned something other than a boolean.
    ComparisonNotBool {
        /// The name of the offending method.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The operands cannot be compared for equality.
    CannotCompareEquality {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands cannot be ordered.
    CannotCompareOrdering {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands cannot be added.
    CannotAdd {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands cannot be subtracted.
    CannotSubtract {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands cannot be multiplied.
    CannotMultiply {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands cannot be divided.
    CannotDivide {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    ZeroDivision {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement executed outside of any method body.
    ReturnOutsideMethod {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    OutputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Variable {name} not found.")
            },
            Self::NotClassInstance { line } => {
                write!(f, "Error on line {line}: Object is not a class instance.")
            },
            Self::MethodNotImplemented { class,
                                         method,
                                         line, } => write!(f,
                                                           "Error on line {line}: Class {class} does not implement the {method} method."),
            Self::ComparisonNotBool { method, line } => {
                write!(f, "Error on line {line}: Method {method} must return Bool.")
            },
            Self::CannotCompareEquality { line } => {
                write!(f, "Error on line {line}: Cannot compare objects for equality.")
            },
            Self::CannotCompareOrdering { line } => {
                write!(f, "Error on line {line}: Cannot compare objects for less.")
            },
            Self::CannotAdd { line } => write!(f, "Error on line {line}: Cannot add arguments."),
            Self::CannotSubtract { line } => {
                write!(f, "Error on line {line}: Cannot subtract arguments.")
            },
            Self::CannotMultiply { line } => {
                write!(f, "Error on line {line}: Cannot multiply arguments.")
            },
            Self::CannotDivide { line } => {
                write!(f, "Error on line {line}: Cannot divide arguments.")
            },
            Self::ZeroDivision { line } => write!(f, "Error on line {line}: Zero division."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::ReturnOutsideMethod { line } => {
                write!(f, "Error on line {line}: Return used outside of a method.")
            },
            Self::OutputFailed { line } => {
                write!(f, "Error on line {line}: Could not write to the output stream.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
