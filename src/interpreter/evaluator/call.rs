use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, execute},
        runtime::{
            class::{Class, ClassInstance},
            object::{Closure, ObjectHolder, Value},
        },
    },
};

/// Name of the constructor special method.
const INIT_METHOD: &str = "__init__";

/// Evaluates a method call.
///
/// The receiver expression must produce a class instance; the arguments are
/// then evaluated left to right and the call dispatched through the
/// instance's class.
pub(in crate::interpreter::evaluator) fn eval_method_call(object: &Statement,
                                                          method: &str,
                                                          args: &[Statement],
                                                          closure: &mut Closure,
                                                          context: &mut Context,
                                                          line: usize)
                                                          -> EvalResult<ObjectHolder> {
    let holder = execute(object, closure, context)?;
    let Some(instance) = holder.as_instance() else {
        return Err(RuntimeError::NotClassInstance { line }.into());
    };
    let instance = instance.clone();
    let actual_args = eval_arguments(args, closure, context)?;
    instance.call(method, &actual_args, context, line)
}

/// Evaluates an instantiation.
///
/// A fresh instance is allocated on every evaluation. When the class
/// provides an `__init__` whose arity matches the argument count, the
/// arguments are evaluated and the constructor runs; otherwise the
/// arguments are left untouched.
pub(in crate::interpreter::evaluator) fn eval_new_instance(class: &Class,
                                                           args: &[Statement],
                                                           closure: &mut Closure,
                                                           context: &mut Context,
                                                           line: usize)
                                                           -> EvalResult<ObjectHolder> {
    let instance = ClassInstance::new(class.clone());
    if instance.has_method(INIT_METHOD, args.len()) {
        let actual_args = eval_arguments(args, closure, context)?;
        instance.call(INIT_METHOD, &actual_args, context, line)?;
    }
    Ok(ObjectHolder::own(Value::Instance(instance)))
}

/// Evaluates the `str(...)` builtin: the argument's printed form, as a
/// string value. An empty holder renders as `None`.
pub(in crate::interpreter::evaluator) fn eval_stringify(arg: &Statement,
                                                        closure: &mut Closure,
                                                        context: &mut Context,
                                                        line: usize)
                                                        -> EvalResult<ObjectHolder> {
    let holder = execute(arg, closure, context)?;
    let mut buffer = String::new();
    holder.print(&mut buffer, context, line)?;
    Ok(ObjectHolder::own(buffer.into()))
}

/// Evaluates call arguments left to right.
fn eval_arguments(args: &[Statement],
                  closure: &mut Closure,
                  context: &mut Context)
                  -> EvalResult<Vec<ObjectHolder>> {
    args.iter()
        .map(|arg| execute(arg, closure, context))
        .collect()
}
