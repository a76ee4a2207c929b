use std::sync::Arc;

use crate::{
    ast::{Expr, Position},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        types::core::Member,
        value::{
            core::Value,
            function::{BoundMethod, Function},
        },
    },
    util::num::f64_to_index_checked,
};

impl Context {
    /// Evaluates `object.member`.
    ///
    /// The member is looked up in the descriptor of the target's type. A
    /// property is read right away; a method is returned as a function value
    /// bound to the target, and only runs when that value is called.
    ///
    /// # Errors
    /// `UnknownMember` if the type has no member of that name.
    ///
    /// # Example
    /// ```
    /// use mapscript::{Context, evaluate};
    ///
    /// let ctx = Context::new();
    /// assert_eq!(evaluate("'abc'.length", &ctx).unwrap().to_string(), "3");
    ///
    /// // A method that is accessed but not called is a function value.
    /// assert_eq!(evaluate("'abc'.upper", &ctx).unwrap().type_name(), "function");
    ///
    /// assert!(evaluate("'abc'.nope", &ctx).is_err());
    /// ```
    pub fn eval_member_access(&self, object: &Expr, member: &str, position: Position) -> EvalResult<Value> {
        let target = self.eval(object)?;
        let descriptor = self.registry().descriptor_of(&target);

        match descriptor.member(member) {
            Some(Member::Property(property)) => property.get(&target, position),
            Some(Member::Method(method)) => {
                Ok(Value::Function(Function::Bound(BoundMethod::new(Arc::clone(method), target))))
            },
            None => Err(EvalError::UnknownMember { type_name: descriptor.name().to_string(),
                                                   member: member.to_string(),
                                                   position }),
        }
    }

    /// Evaluates `object[index]` with a 0-based, whole-numbered index.
    ///
    /// # Errors
    /// - `ExpectedVector` if the target is not a vector.
    /// - `ExpectedNumber` / `InvalidIndex` if the index is not a whole,
    ///   non-negative number.
    /// - `IndexOutOfBounds` if there is no component at that index.
    pub fn eval_index(&self, object: &Expr, index: &Expr, position: Position) -> EvalResult<Value> {
        let target = self.eval(object)?;
        let components = target.as_vector(position)?;
        let index = f64_to_index_checked(self.eval(index)?.as_number(index.position())?, position)?;

        components.get(index)
                  .map(|component| Value::Number(*component))
                  .ok_or(EvalError::IndexOutOfBounds { index,
                                                       length: components.len(),
                                                       position })
    }

    /// Evaluates the elements of a vector literal left to right. Every
    /// element must be a number.
    pub fn eval_vector_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        let components = elements.iter()
                                 .map(|element| self.eval(element)?.as_number(element.position()))
                                 .collect::<EvalResult<Vec<f64>>>()?;

        Ok(Value::from(components))
    }
}
