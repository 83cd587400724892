//! Function calls and instantiation.

use super::Interpreter;
use crate::errors::{recursion_limit_exceeded, type_mismatch, wrong_parameter_count};
use crate::{
    ClassValue, EvalError, EvalResult, FunctionValue, Heap, ObjectValue, Scope, Value, Variable,
};

impl Interpreter<'_> {
    /// Call `func` with already-evaluated arguments.
    ///
    /// The body runs in a fresh frame holding one new variable per
    /// parameter, with `this` bound to the receiver if there is one. A
    /// `return` anywhere in the body ends here and becomes the result.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            function = self.interner.lookup(func.name),
            line = line,
            declared_at = func.line
        )
    )]
    pub(crate) fn call_function(
        &mut self,
        func: &Heap<FunctionValue>,
        args: Vec<Value>,
        this: Option<Value>,
        line: u32,
    ) -> EvalResult {
        if args.len() != func.params.len() {
            return Err(wrong_parameter_count(
                self.interner.lookup(func.name),
                func.params.len(),
                args.len(),
                line,
            ));
        }

        let mut scope = Scope::with_this(this);
        for (param, value) in func.params.iter().zip(args) {
            if !value.conforms_to(param.ty) {
                return Err(type_mismatch(
                    self.interner.lookup(param.name),
                    param.ty.as_str(self.interner),
                    &value.display(self.interner).to_string(),
                    line,
                ));
            }
            scope.define(Variable::new(param.name, param.ty, value));
        }

        // Synthesized constructors have no body.
        let Some(body) = func.body else {
            return Ok(Value::Undefined);
        };

        self.check_recursion_limit(line)?;
        self.call_depth += 1;
        let result = self.run_body(body, scope);
        self.call_depth -= 1;
        Ok(result?.into_call_result())
    }

    /// Allocate an instance of `class` and run its constructor on it.
    pub(crate) fn instantiate(
        &mut self,
        class: &Heap<ClassValue>,
        args: Vec<Value>,
        line: u32,
    ) -> EvalResult {
        let object = Value::object(ObjectValue::new(class.clone()));
        self.call_function(class.constructor(), args, Some(object.clone()), line)?;
        Ok(object)
    }

    fn check_recursion_limit(&self, line: u32) -> Result<(), EvalError> {
        match self.max_call_depth {
            Some(max) if self.call_depth >= max => Err(recursion_limit_exceeded(max, line)),
            _ => Ok(()),
        }
    }
}
