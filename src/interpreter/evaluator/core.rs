use std::io;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{eval_add, eval_comparison, eval_div, eval_mult, eval_sub},
            call::{eval_method_call, eval_new_instance, eval_stringify},
            logic::{eval_and, eval_not, eval_or},
            statement::{
                eval_assignment, eval_class_definition, eval_compound, eval_field_assignment,
                eval_if_else, eval_print, eval_variable,
            },
        },
        runtime::object::{Closure, ObjectHolder},
    },
};

/// Non-local outcomes that unwind evaluation.
///
/// Both arms travel the error channel of [`EvalResult`], so `?` propagates
/// them through every node. Only a `MethodBody` node absorbs the `Return`
/// arm; everything else passes it through untouched, which makes a `return`
/// statement terminate the rest of its method.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` statement transferring a value to the enclosing method
    /// body.
    Return {
        /// The returned value.
        value: ObjectHolder,
        /// The line of the `return` statement.
        line:  usize,
    },
    /// A runtime error aborting evaluation.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// The error side carries either a genuine runtime error or the return
/// signal; see [`Unwind`].
pub type EvalResult<T> = Result<T, Unwind>;

/// Evaluator-wide services supplied by the embedder.
///
/// Currently this is the output sink that `print` writes to. The sink is
/// borrowed for the duration of one evaluation; tests typically pass a
/// `Vec<u8>` and the command line passes locked stdout.
pub struct Context<'a> {
    output: &'a mut dyn io::Write,
}

impl<'a> Context<'a> {
    /// Creates a context writing program output to the given sink.
    pub fn new(output: &'a mut dyn io::Write) -> Self {
        Self { output }
    }

    /// Returns the output sink.
    pub fn output_stream(&mut self) -> &mut dyn io::Write {
        &mut *self.output
    }
}

/// Evaluates a single AST node against a closure and a context.
///
/// This is the main entry point of the evaluator; it dispatches on the node
/// variant and recurses through the helpers of the sibling modules. Every
/// node produces an object holder, possibly empty.
///
/// # Errors
/// Any runtime error of the program, or the return signal of an enclosing
/// `return` statement; see [`Unwind`].
pub fn execute(statement: &Statement,
               closure: &mut Closure,
               context: &mut Context)
               -> EvalResult<ObjectHolder> {
    match statement {
        Statement::Const { value } => Ok(value.clone()),
        Statement::Assignment { var, rv } => eval_assignment(var, rv, closure, context),
        Statement::Variable { dotted_ids, line } => eval_variable(dotted_ids, closure, *line),
        Statement::Print { args, line } => eval_print(args, closure, context, *line),
        Statement::MethodCall { object,
                                method,
                                args,
                                line, } => {
            eval_method_call(object, method, args, closure, context, *line)
        },
        Statement::NewInstance { class, args, line } => {
            eval_new_instance(class, args, closure, context, *line)
        },
        Statement::Stringify { arg, line } => eval_stringify(arg, closure, context, *line),
        Statement::Add { lhs, rhs, line } => eval_add(lhs, rhs, closure, context, *line),
        Statement::Sub { lhs, rhs, line } => eval_sub(lhs, rhs, closure, context, *line),
        Statement::Mult { lhs, rhs, line } => eval_mult(lhs, rhs, closure, context, *line),
        Statement::Div { lhs, rhs, line } => eval_div(lhs, rhs, closure, context, *line),
        Statement::Or { lhs, rhs } => eval_or(lhs, rhs, closure, context),
        Statement::And { lhs, rhs } => eval_and(lhs, rhs, closure, context),
        Statement::Not { arg } => eval_not(arg, closure, context),
        Statement::Comparison { cmp,
                                lhs,
                                rhs,
                                line, } => {
            eval_comparison(*cmp, lhs, rhs, closure, context, *line)
        },
        Statement::Compound { statements } => eval_compound(statements, closure, context),
        Statement::Return { statement, line } => eval_return(statement, closure, context, *line),
        Statement::MethodBody { body } => eval_method_body(body, closure, context),
        Statement::ClassDefinition { class } => eval_class_definition(class, closure),
        Statement::FieldAssignment { object,
                                     field_name,
                                     rv, } => {
            eval_field_assignment(object, field_name, rv, closure, context)
        },
        Statement::IfElse { condition,
                            if_body,
                            else_body, } => {
            eval_if_else(condition, if_body, else_body.as_deref(), closure, context)
        },
    }
}

/// Evaluates the returned expression and raises the return signal.
fn eval_return(statement: &Statement,
               closure: &mut Closure,
               context: &mut Context,
               line: usize)
               -> EvalResult<ObjectHolder> {
    let value = execute(statement, closure, context)?;
    Err(Unwind::Return { value, line })
}

/// Executes a method body, converting a captured return signal into the
/// method's result. A body that finishes without returning produces the
/// empty holder. Runtime errors pass through.
fn eval_method_body(body: &Statement,
                    closure: &mut Closure,
                    context: &mut Context)
                    -> EvalResult<ObjectHolder> {
    match execute(body, closure, context) {
        Ok(_) => Ok(ObjectHolder::none()),
        Err(Unwind::Return { value, .. }) => Ok(value),
        Err(error) => Err(error),
    }
}
