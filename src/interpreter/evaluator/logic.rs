use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{Context, EvalResult, execute},
        runtime::object::{Closure, ObjectHolder},
    },
};

/// Evaluates a short-circuit `or`, producing a boolean. The right operand
/// is only evaluated when the left one is falsy.
pub(in crate::interpreter::evaluator) fn eval_or(lhs: &Statement,
                                                 rhs: &Statement,
                                                 closure: &mut Closure,
                                                 context: &mut Context)
                                                 -> EvalResult<ObjectHolder> {
    if execute(lhs, closure, context)?.is_true() {
        return Ok(ObjectHolder::own(true.into()));
    }
    let rhs = execute(rhs, closure, context)?;
    Ok(ObjectHolder::own(rhs.is_true().into()))
}

/// Evaluates a short-circuit `and`, producing a boolean. The right operand
/// is only evaluated when the left one is truthy.
pub(in crate::interpreter::evaluator) fn eval_and(lhs: &Statement,
                                                  rhs: &Statement,
                                                  closure: &mut Closure,
                                                  context: &mut Context)
                                                  -> EvalResult<ObjectHolder> {
    if !execute(lhs, closure, context)?.is_true() {
        return Ok(ObjectHolder::own(false.into()));
    }
    let rhs = execute(rhs, closure, context)?;
    Ok(ObjectHolder::own(rhs.is_true().into()))
}

/// Evaluates a logical negation, producing a boolean.
pub(in crate::interpreter::evaluator) fn eval_not(arg: &Statement,
                                                  closure: &mut Closure,
                                                  context: &mut Context)
                                                  -> EvalResult<ObjectHolder> {
    let arg = execute(arg, closure, context)?;
    Ok(ObjectHolder::own((!arg.is_true()).into()))
}
