//! Unary operator implementations for the evaluator.

use tern_ir::UnaryOp;

use crate::Value;

/// Evaluate a unary operation. Never fails: the operand is coerced.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Value {
    match op {
        UnaryOp::Not => Value::Bool(!value.to_bool()),
        UnaryOp::Neg => Value::Number(-value.to_number()),
    }
}
