//! Binary operator implementations for the evaluator.
//!
//! Every operator coerces its operands first: `&&` and `||` to booleans, the
//! rest to numbers. Comparisons are numeric only, so two strings that both
//! coerce to `0` compare equal.
//!
//! Operands are evaluated by the caller before dispatch, which means `&&` and
//! `||` always evaluate both sides.

use tern_ir::BinaryOp;

use crate::errors::division_by_zero;
use crate::{EvalResult, Value};

/// Evaluate a binary operation on already-evaluated operands.
///
/// `line` is the line of the operator node, used for `DivisionByZero`.
#[expect(
    clippy::float_cmp,
    reason = "strict equality is exact numeric equality"
)]
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp, line: u32) -> EvalResult {
    let (l, r) = (left.to_number(), right.to_number());
    let value = match op {
        BinaryOp::And => Value::Bool(left.to_bool() && right.to_bool()),
        BinaryOp::Or => Value::Bool(left.to_bool() || right.to_bool()),
        BinaryOp::Add => Value::Number(l + r),
        BinaryOp::Sub => Value::Number(l - r),
        BinaryOp::Mul => Value::Number(l * r),
        BinaryOp::Div => {
            // Also catches -0.0.
            if r == 0.0 {
                return Err(division_by_zero(line));
            }
            Value::Number(l / r)
        }
        BinaryOp::StrictEq => Value::Bool(l == r),
        BinaryOp::StrictNotEq => Value::Bool(l != r),
        BinaryOp::Lt => Value::Bool(l < r),
        BinaryOp::Gt => Value::Bool(l > r),
        BinaryOp::LtEq => Value::Bool(l <= r),
        BinaryOp::GtEq => Value::Bool(l >= r),
    };
    Ok(value)
}
