use crate::{
    ast::Comparator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        runtime::{
            class::{EQ_METHOD, LT_METHOD},
            object::ObjectHolder,
        },
    },
};

/// Decides whether two values are equal.
///
/// Numbers, strings and booleans compare by value when both operands have
/// the same type. A class instance on the left delegates to its one-argument
/// `__eq__` method, whose result must be a boolean. Two empty holders are
/// equal. Every other combination is an error; in particular, operands of
/// different primitive types never compare equal, they fail.
///
/// # Errors
/// - `CannotCompareEquality` for unsupported operand combinations.
/// - `ComparisonNotBool` when `__eq__` produces a non-boolean.
/// - Any failure of the `__eq__` body.
pub fn equal(lhs: &ObjectHolder,
             rhs: &ObjectHolder,
             context: &mut Context,
             line: usize)
             -> EvalResult<bool> {
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        return Ok(l == r);
    }
    if let (Some(l), Some(r)) = (lhs.as_str(), rhs.as_str()) {
        return Ok(l == r);
    }
    if let (Some(l), Some(r)) = (lhs.as_bool(), rhs.as_bool()) {
        return Ok(l == r);
    }
    if let Some(instance) = lhs.as_instance()
       && instance.has_method(EQ_METHOD, 1)
    {
        let result = instance.call(EQ_METHOD, &[rhs.clone()], context, line)?;
        return result.as_bool()
                     .ok_or_else(|| RuntimeError::ComparisonNotBool { method:
                                                                          EQ_METHOD.to_string(),
                                                                      line }.into());
    }
    if lhs.value().is_none() && rhs.value().is_none() {
        return Ok(true);
    }
    Err(RuntimeError::CannotCompareEquality { line }.into())
}

/// Decides whether `lhs` orders strictly before `rhs`.
///
/// The cascade mirrors [`equal`]: same-type numbers, strings and booleans
/// compare by value, a class instance on the left delegates to its
/// one-argument `__lt__` method, and anything else is an error.
///
/// # Errors
/// - `CannotCompareOrdering` for unsupported operand combinations.
/// - `ComparisonNotBool` when `__lt__` produces a non-boolean.
/// - Any failure of the `__lt__` body.
pub fn less(lhs: &ObjectHolder,
            rhs: &ObjectHolder,
            context: &mut Context,
            line: usize)
            -> EvalResult<bool> {
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        return Ok(l < r);
    }
    if let (Some(l), Some(r)) = (lhs.as_str(), rhs.as_str()) {
        return Ok(l < r);
    }
    if let (Some(l), Some(r)) = (lhs.as_bool(), rhs.as_bool()) {
        return Ok(l < r);
    }
    if let Some(instance) = lhs.as_instance()
       && instance.has_method(LT_METHOD, 1)
    {
        let result = instance.call(LT_METHOD, &[rhs.clone()], context, line)?;
        return result.as_bool()
                     .ok_or_else(|| RuntimeError::ComparisonNotBool { method:
                                                                          LT_METHOD.to_string(),
                                                                      line }.into());
    }
    Err(RuntimeError::CannotCompareOrdering { line }.into())
}

/// The negation of [`equal`].
///
/// # Errors
/// Fails whenever [`equal`] fails.
pub fn not_equal(lhs: &ObjectHolder,
                 rhs: &ObjectHolder,
                 context: &mut Context,
                 line: usize)
                 -> EvalResult<bool> {
    Ok(!equal(lhs, rhs, context, line)?)
}

/// Decides whether `lhs` orders strictly after `rhs`, as neither less nor
/// equal. [`equal`] is only consulted when [`less`] answers false.
///
/// # Errors
/// Fails whenever [`less`] or [`equal`] fails.
pub fn greater(lhs: &ObjectHolder,
               rhs: &ObjectHolder,
               context: &mut Context,
               line: usize)
               -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context, line)? && !equal(lhs, rhs, context, line)?)
}

/// Decides whether `lhs` orders before `rhs` or equals it. [`equal`] is
/// only consulted when [`less`] answers false.
///
/// # Errors
/// Fails whenever [`less`] or [`equal`] fails.
pub fn less_or_equal(lhs: &ObjectHolder,
                     rhs: &ObjectHolder,
                     context: &mut Context,
                     line: usize)
                     -> EvalResult<bool> {
    Ok(less(lhs, rhs, context, line)? || equal(lhs, rhs, context, line)?)
}

/// The negation of [`less`]. Equality is deliberately not consulted, so for
/// class instances only `__lt__` is involved.
///
/// # Errors
/// Fails whenever [`less`] fails.
pub fn greater_or_equal(lhs: &ObjectHolder,
                        rhs: &ObjectHolder,
                        context: &mut Context,
                        line: usize)
                        -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context, line)?)
}

/// Applies the comparator selected by a comparison node.
///
/// # Errors
/// Fails whenever the underlying comparison fails.
pub fn compare(cmp: Comparator,
               lhs: &ObjectHolder,
               rhs: &ObjectHolder,
               context: &mut Context,
               line: usize)
               -> EvalResult<bool> {
    match cmp {
        Comparator::Equal => equal(lhs, rhs, context, line),
        Comparator::NotEqual => not_equal(lhs, rhs, context, line),
        Comparator::Less => less(lhs, rhs, context, line),
        Comparator::Greater => greater(lhs, rhs, context, line),
        Comparator::LessOrEqual => less_or_equal(lhs, rhs, context, line),
        Comparator::GreaterOrEqual => greater_or_equal(lhs, rhs, context, line),
    }
}
