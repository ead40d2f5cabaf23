use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, execute},
        runtime::{
            class::Class,
            object::{Closure, ObjectHolder, Value},
        },
    },
};

/// Evaluates the right-hand side and binds it in the closure, creating or
/// overwriting the binding. Produces the assigned value.
pub(in crate::interpreter::evaluator) fn eval_assignment(var: &str,
                                                         rv: &Statement,
                                                         closure: &mut Closure,
                                                         context: &mut Context)
                                                         -> EvalResult<ObjectHolder> {
    let value = execute(rv, closure, context)?;
    closure.insert(var.to_string(), value.clone());
    Ok(value)
}

/// Resolves a chain of dotted identifiers.
///
/// The first name is looked up in the closure; each further name requires
/// the value so far to be a class instance and reads one of its fields.
pub(in crate::interpreter::evaluator) fn eval_variable(dotted_ids: &[String],
                                                       closure: &Closure,
                                                       line: usize)
                                                       -> EvalResult<ObjectHolder> {
    let mut ids = dotted_ids.iter();
    let Some(first) = ids.next() else {
        return Ok(ObjectHolder::none());
    };
    let mut holder = closure.get(first)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone(),
                                                                           line })?;
    for name in ids {
        let instance = holder.as_instance()
                             .ok_or(RuntimeError::NotClassInstance { line })?;
        let field = instance.field(name)
                            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                           line })?;
        holder = field;
    }
    Ok(holder)
}

/// Evaluates and prints every argument, separated by single spaces and
/// terminated by one newline. Empty holders print as `None`. The whole line
/// is composed in a buffer and written to the sink in one piece.
pub(in crate::interpreter::evaluator) fn eval_print(args: &[Statement],
                                                    closure: &mut Closure,
                                                    context: &mut Context,
                                                    line: usize)
                                                    -> EvalResult<ObjectHolder> {
    let mut buffer = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            buffer.push(' ');
        }
        let holder = execute(arg, closure, context)?;
        holder.print(&mut buffer, context, line)?;
    }
    buffer.push('\n');
    context.output_stream()
           .write_all(buffer.as_bytes())
           .map_err(|_| RuntimeError::OutputFailed { line })?;
    Ok(ObjectHolder::none())
}

/// Writes a field of a class instance, producing the assigned value.
///
/// When the object expression does not evaluate to a class instance the
/// statement is a silent no-op producing the empty holder, and the
/// right-hand side is not evaluated.
pub(in crate::interpreter::evaluator) fn eval_field_assignment(object: &Statement,
                                                               field_name: &str,
                                                               rv: &Statement,
                                                               closure: &mut Closure,
                                                               context: &mut Context)
                                                               -> EvalResult<ObjectHolder> {
    let holder = execute(object, closure, context)?;
    let Some(instance) = holder.as_instance() else {
        return Ok(ObjectHolder::none());
    };
    let instance = instance.clone();
    let value = execute(rv, closure, context)?;
    instance.set_field(field_name.to_string(), value.clone());
    Ok(value)
}

/// Binds the class object in the closure under the class name.
pub(in crate::interpreter::evaluator) fn eval_class_definition(class: &Class,
                                                               closure: &mut Closure)
                                                               -> EvalResult<ObjectHolder> {
    closure.insert(class.name().to_string(),
                   ObjectHolder::own(Value::Class(class.clone())));
    Ok(ObjectHolder::none())
}

/// Tests the condition for truthiness and executes the matching branch,
/// producing its result. With no else branch a falsy condition produces the
/// empty holder.
pub(in crate::interpreter::evaluator) fn eval_if_else(condition: &Statement,
                                                      if_body: &Statement,
                                                      else_body: Option<&Statement>,
                                                      closure: &mut Closure,
                                                      context: &mut Context)
                                                      -> EvalResult<ObjectHolder> {
    if execute(condition, closure, context)?.is_true() {
        return execute(if_body, closure, context);
    }
    match else_body {
        Some(body) => execute(body, closure, context),
        None => Ok(ObjectHolder::none()),
    }
}

/// Executes the statements in order, producing the empty holder. A return
/// signal raised by an inner statement skips the rest of the sequence and
/// keeps unwinding.
pub(in crate::interpreter::evaluator) fn eval_compound(statements: &[Statement],
                                                       closure: &mut Closure,
                                                       context: &mut Context)
                                                       -> EvalResult<ObjectHolder> {
    for statement in statements {
        execute(statement, closure, context)?;
    }
    Ok(ObjectHolder::none())
}
