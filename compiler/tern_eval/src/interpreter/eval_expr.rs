//! Expression evaluation.

use tern_ir::{NodeId, NodeKind};

use super::Interpreter;
use crate::errors::{cast_to_object, not_a_class, not_a_function};
use crate::stack::ensure_sufficient_stack;
use crate::{evaluate_binary, evaluate_unary, EvalResult, ObjectRef, Value};

impl Interpreter<'_> {
    /// Evaluate an expression to a value.
    pub(crate) fn eval(&mut self, id: NodeId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: NodeId) -> EvalResult {
        let ast = self.ast;
        let node = ast.node(id);
        let line = node.line;

        match &node.kind {
            NodeKind::Literal(literal) => Ok(Value::from_literal(literal)),
            NodeKind::Variable { name } => Ok(self.resolve(id, *name)?.get()),
            NodeKind::Unary { op } => {
                let operand = self.eval(self.operand(id, 0)?)?;
                Ok(evaluate_unary(&operand, *op))
            }
            NodeKind::Binary { op } => {
                // Both sides are always evaluated, left first.
                let left = self.eval(self.operand(id, 0)?)?;
                let right = self.eval(self.operand(id, 1)?)?;
                evaluate_binary(&left, &right, *op, line)
            }
            NodeKind::MemberAccess { member } => {
                let object = self.eval_receiver(id, line)?;
                Ok(object.member(*member).map_or(Value::Undefined, |var| var.get()))
            }
            NodeKind::Call => self.eval_call(id, line),
            NodeKind::New { class } => {
                let value = self.resolve(id, *class)?.get();
                let Value::Class(class_value) = value else {
                    return Err(not_a_class(self.interner.lookup(*class), line));
                };
                let args = self.eval_args(node.children())?;
                self.instantiate(&class_value, args, line)
            }
            NodeKind::This => Ok(self.env.this(ast, id)),
            NodeKind::Block
            | NodeKind::ExpressionStatement
            | NodeKind::VarDeclaration { .. }
            | NodeKind::DeclaredAssignment { .. }
            | NodeKind::Assignment { .. }
            | NodeKind::MemberAssignment
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::ClassDeclaration(_)
            | NodeKind::Return
            | NodeKind::Print
            | NodeKind::If
            | NodeKind::While => Err(crate::errors::malformed_tree(node.kind.describe(), line)),
        }
    }

    /// Evaluate the receiver of a `MemberAccess` node and cast it to an
    /// object.
    fn eval_receiver(&mut self, access: NodeId, line: u32) -> EvalResult<ObjectRef> {
        let receiver = self.eval(self.operand(access, 0)?)?;
        receiver
            .to_object()
            .ok_or_else(|| cast_to_object(&receiver.display(self.interner).to_string(), line))
    }

    /// `callee(args...)`. A member-access callee passes its receiver as
    /// `this`.
    fn eval_call(&mut self, id: NodeId, line: u32) -> EvalResult {
        let ast = self.ast;
        let callee_id = self.operand(id, 0)?;
        let (callee, this) = match *ast.kind(callee_id) {
            NodeKind::MemberAccess { member } => {
                let object = self.eval_receiver(callee_id, line)?;
                let callee = object.member(member).map_or(Value::Undefined, |var| var.get());
                (callee, Some(object.into_value()))
            }
            _ => (self.eval(callee_id)?, None),
        };

        let Some(object) = callee.to_object() else {
            return Err(cast_to_object(
                &callee.display(self.interner).to_string(),
                line,
            ));
        };
        let ObjectRef::Function(func) = object else {
            return Err(not_a_function(
                &callee.display(self.interner).to_string(),
                line,
            ));
        };

        let args = self.eval_args(&ast.children(id)[1..])?;
        self.call_function(&func, args, this, line)
    }

    /// Evaluate arguments left to right.
    fn eval_args(&mut self, ids: &[NodeId]) -> EvalResult<Vec<Value>> {
        ids.iter().map(|&arg| self.eval(arg)).collect()
    }
}
