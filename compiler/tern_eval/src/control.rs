//! Statement completions.
//!
//! `return` is not an error: statements report how they finished, and
//! composite statements stop at the first `Return` and hand it upward. Only
//! the function call boundary turns a `Return` into a value.

use crate::{EvalError, Value};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Completion {
    /// Fell through to the next statement.
    Normal,
    /// A `return` is unwinding to the enclosing call.
    Return(Value),
}

impl Completion {
    /// Whether execution of the enclosing statement list should stop.
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Completion::Return(_))
    }

    /// The value a call produces when its body finished this way.
    #[inline]
    pub fn into_call_result(self) -> Value {
        match self {
            Completion::Normal => Value::Undefined,
            Completion::Return(value) => value,
        }
    }
}

/// Result of executing a statement.
pub type ExecResult = Result<Completion, EvalError>;
