/// Classes, methods and class instances.
///
/// Defines the `Class` and `ClassInstance` handles, single-inheritance
/// method lookup, and method invocation with `self` bound into a fresh
/// closure.
pub mod class;
/// Comparison dispatch.
///
/// Implements equality and ordering over runtime values, delegating to the
/// `__eq__` and `__lt__` special methods of class instances, plus the
/// comparators derived from them.
pub mod compare;
/// Runtime values and the object holder.
///
/// Declares the `Value` enum covering every runtime type, the `ObjectHolder`
/// handle with its empty state, truthiness, and the canonical printed form
/// of each value.
pub mod object;
