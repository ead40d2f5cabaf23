use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, execute},
        runtime::object::{Closure, ObjectHolder, Value},
    },
};

/// Name of the special method giving an instance its printed form.
pub(crate) const STR_METHOD: &str = "__str__";
/// Name of the special method implementing equality.
pub(crate) const EQ_METHOD: &str = "__eq__";
/// Name of the special method implementing ordering.
pub(crate) const LT_METHOD: &str = "__lt__";

/// A method of a class: a name, the formal parameter names, and the body.
///
/// The body is a single statement, in practice a `MethodBody` wrapping the
/// parsed suite so that `return` stops there.
#[derive(Debug, Clone)]
pub struct Method {
    /// The name of the method.
    pub name:          String,
    /// The formal parameter names, in declaration order. `self` is implicit
    /// and not listed.
    pub formal_params: Vec<String>,
    /// The statement executed when the method is called.
    pub body:          Statement,
}

#[derive(Debug)]
struct ClassData {
    name:    String,
    methods: Vec<Method>,
    parent:  Option<Class>,
}

/// A class object: an ordered sequence of methods and an optional parent.
///
/// The handle is reference counted; cloning shares the class. Inheritance
/// is single: method lookup walks the parent chain and the first *name*
/// match wins, regardless of arity. Checking the arity is the call site's
/// concern.
#[derive(Debug, Clone)]
pub struct Class(Rc<ClassData>);

impl Class {
    /// Creates a class from its name, methods and optional parent.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Self>) -> Self {
        Self(Rc::new(ClassData { name,
                                 methods,
                                 parent }))
    }

    /// Returns the name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Looks up a method by name, walking the inheritance chain. The first
    /// method whose name matches is returned even when its arity differs
    /// from what the caller needs.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.0
            .methods
            .iter()
            .find(|method| method.name == name)
            .or_else(|| self.0.parent.as_ref().and_then(|parent| parent.method(name)))
    }
}

#[derive(Debug)]
struct InstanceData {
    class:  Class,
    fields: RefCell<Closure>,
}

/// An instance of a class: a reference to the class plus a closure of
/// fields.
///
/// The handle is reference counted; cloning shares the instance, so a
/// method receiving `self` and a variable bound to the same instance alias
/// one storage. Fields are created on first assignment.
#[derive(Debug, Clone)]
pub struct ClassInstance(Rc<InstanceData>);

impl ClassInstance {
    /// Creates a fresh instance of the given class with no fields.
    #[must_use]
    pub fn new(class: Class) -> Self {
        Self(Rc::new(InstanceData { class,
                                    fields: RefCell::new(Closure::new()), }))
    }

    /// Returns the class the instance belongs to.
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// Reads a field by name, if it has been assigned.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<ObjectHolder> {
        self.0.fields.borrow().get(name).cloned()
    }

    /// Writes a field, creating it when absent.
    pub fn set_field(&self, name: String, value: ObjectHolder) {
        self.0.fields.borrow_mut().insert(name, value);
    }

    /// Decides whether the instance can answer a call of `method` with
    /// `argument_count` arguments: the method found by name lookup must
    /// declare exactly that many formal parameters.
    #[must_use]
    pub fn has_method(&self, method: &str, argument_count: usize) -> bool {
        self.0
            .class
            .method(method)
            .is_some_and(|found| found.formal_params.len() == argument_count)
    }

    /// Calls a method on the instance.
    ///
    /// A fresh closure is populated with `self` (sharing this instance) and
    /// the formal parameters bound to the actual arguments, and the method
    /// body is executed against it.
    ///
    /// # Errors
    /// Fails when no method of that name and arity exists, or when the body
    /// fails.
    pub fn call(&self,
                method: &str,
                actual_args: &[ObjectHolder],
                context: &mut Context,
                line: usize)
                -> EvalResult<ObjectHolder> {
        let found = self.0
                        .class
                        .method(method)
                        .filter(|found| found.formal_params.len() == actual_args.len())
                        .ok_or_else(|| RuntimeError::MethodNotImplemented { class:  self.class()
                                                                                        .name()
                                                                                        .to_string(),
                                                                            method:
                                                                                method.to_string(),
                                                                            line })?;
        let mut closure = Closure::new();
        closure.insert("self".to_string(),
                       ObjectHolder::own(Value::Instance(self.clone())));
        for (param, arg) in found.formal_params.iter().zip(actual_args) {
            closure.insert(param.clone(), arg.clone());
        }
        execute(&found.body, &mut closure, context)
    }

    /// Writes the printed form of the instance into `buf`: the result of a
    /// zero-argument `__str__` when the class provides one, an identity
    /// token otherwise.
    ///
    /// # Errors
    /// Propagates any failure of the `__str__` body.
    pub fn print(&self, buf: &mut String, context: &mut Context, line: usize) -> EvalResult<()> {
        if self.has_method(STR_METHOD, 0) {
            let printed = self.call(STR_METHOD, &[], context, line)?;
            printed.print(buf, context, line)
        } else {
            buf.push_str(&format!("<{} instance at {:p}>",
                                  self.class().name(),
                                  Rc::as_ptr(&self.0)));
            Ok(())
        }
    }
}
