use crate::{
    ast::{Comparator, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, execute},
        runtime::{
            compare,
            object::{Closure, ObjectHolder},
        },
    },
};

/// Name of the special method implementing addition.
const ADD_METHOD: &str = "__add__";

/// Evaluates an addition.
///
/// Two numbers add with overflow checking, two strings concatenate, and a
/// class instance on the left delegates to its one-argument `__add__`
/// method. Every other combination is an error.
pub(in crate::interpreter::evaluator) fn eval_add(lhs: &Statement,
                                                  rhs: &Statement,
                                                  closure: &mut Closure,
                                                  context: &mut Context,
                                                  line: usize)
                                                  -> EvalResult<ObjectHolder> {
    let lhs = execute(lhs, closure, context)?;
    let rhs = execute(rhs, closure, context)?;
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        let sum = l.checked_add(r).ok_or(RuntimeError::Overflow { line })?;
        return Ok(ObjectHolder::own(sum.into()));
    }
    if let (Some(l), Some(r)) = (lhs.as_str(), rhs.as_str()) {
        return Ok(ObjectHolder::own(format!("{l}{r}").into()));
    }
    if let Some(instance) = lhs.as_instance()
       && instance.has_method(ADD_METHOD, 1)
    {
        return instance.call(ADD_METHOD, &[rhs.clone()], context, line);
    }
    Err(RuntimeError::CannotAdd { line }.into())
}

/// Evaluates a subtraction of two numbers, with overflow checking.
pub(in crate::interpreter::evaluator) fn eval_sub(lhs: &Statement,
                                                  rhs: &Statement,
                                                  closure: &mut Closure,
                                                  context: &mut Context,
                                                  line: usize)
                                                  -> EvalResult<ObjectHolder> {
    let lhs = execute(lhs, closure, context)?;
    let rhs = execute(rhs, closure, context)?;
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        let difference = l.checked_sub(r).ok_or(RuntimeError::Overflow { line })?;
        return Ok(ObjectHolder::own(difference.into()));
    }
    Err(RuntimeError::CannotSubtract { line }.into())
}

/// Evaluates a multiplication of two numbers, with overflow checking.
pub(in crate::interpreter::evaluator) fn eval_mult(lhs: &Statement,
                                                   rhs: &Statement,
                                                   closure: &mut Closure,
                                                   context: &mut Context,
                                                   line: usize)
                                                   -> EvalResult<ObjectHolder> {
    let lhs = execute(lhs, closure, context)?;
    let rhs = execute(rhs, closure, context)?;
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        let product = l.checked_mul(r).ok_or(RuntimeError::Overflow { line })?;
        return Ok(ObjectHolder::own(product.into()));
    }
    Err(RuntimeError::CannotMultiply { line }.into())
}

/// Evaluates a division of two numbers.
///
/// Division truncates toward zero. Dividing by zero is an error, as is the
/// one overflowing quotient of two's complement.
pub(in crate::interpreter::evaluator) fn eval_div(lhs: &Statement,
                                                  rhs: &Statement,
                                                  closure: &mut Closure,
                                                  context: &mut Context,
                                                  line: usize)
                                                  -> EvalResult<ObjectHolder> {
    let lhs = execute(lhs, closure, context)?;
    let rhs = execute(rhs, closure, context)?;
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        if r == 0 {
            return Err(RuntimeError::ZeroDivision { line }.into());
        }
        let quotient = l.checked_div(r).ok_or(RuntimeError::Overflow { line })?;
        return Ok(ObjectHolder::own(quotient.into()));
    }
    Err(RuntimeError::CannotDivide { line }.into())
}

/// Evaluates both operands and applies the selected comparator, producing a
/// boolean.
pub(in crate::interpreter::evaluator) fn eval_comparison(cmp: Comparator,
                                                         lhs: &Statement,
                                                         rhs: &Statement,
                                                         closure: &mut Closure,
                                                         context: &mut Context,
                                                         line: usize)
                                                         -> EvalResult<ObjectHolder> {
    let lhs = execute(lhs, closure, context)?;
    let rhs = execute(rhs, closure, context)?;
    let result = compare::compare(cmp, &lhs, &rhs, context, line)?;
    Ok(ObjectHolder::own(result.into()))
}
