//! Statement execution.

use tern_ir::{ClassDecl, FunctionDecl, Name, NodeId, NodeKind, TypeRef};

use super::Interpreter;
use crate::errors::{
    cast_to_object, malformed_tree, multiple_constructors, no_member, return_outside_function,
};
use crate::stack::ensure_sufficient_stack;
use crate::{ClassValue, Completion, EvalResult, ExecResult, FunctionValue, Value, Variable};

impl Interpreter<'_> {
    /// Execute one statement.
    pub(crate) fn exec(&mut self, id: NodeId) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_inner(id))
    }

    fn exec_inner(&mut self, id: NodeId) -> ExecResult {
        let ast = self.ast;
        let node = ast.node(id);
        let line = node.line;
        tracing::trace!(line, kind = node.kind.describe(), "exec");

        match &node.kind {
            NodeKind::Block => self.run_block(id),
            NodeKind::ExpressionStatement => {
                self.eval(self.operand(id, 0)?)?;
                Ok(Completion::Normal)
            }
            NodeKind::VarDeclaration { name, ty } => {
                self.declare(id, *name, *ty)?;
                Ok(Completion::Normal)
            }
            NodeKind::DeclaredAssignment { name, ty } => {
                let var = self.declare(id, *name, *ty)?;
                let value = self.eval(self.operand(id, 0)?)?;
                self.assign(&var, value, line)?;
                Ok(Completion::Normal)
            }
            NodeKind::Assignment { name } => {
                let var = self.resolve(id, *name)?;
                let value = self.eval(self.operand(id, 0)?)?;
                self.assign(&var, value, line)?;
                Ok(Completion::Normal)
            }
            NodeKind::MemberAssignment => {
                self.exec_member_assignment(id, line)?;
                Ok(Completion::Normal)
            }
            NodeKind::FunctionDeclaration(decl) => {
                self.declare_function(id, decl, line);
                Ok(Completion::Normal)
            }
            NodeKind::ClassDeclaration(decl) => {
                self.declare_class(id, decl, line)?;
                Ok(Completion::Normal)
            }
            NodeKind::Return => {
                let value = self.eval(self.operand(id, 0)?)?;
                if self.call_depth == 0 {
                    return Err(return_outside_function(line));
                }
                Ok(Completion::Return(value))
            }
            NodeKind::Print => {
                let value = self.eval(self.operand(id, 0)?)?;
                let text = value.display(self.interner).to_string();
                self.print_handler.println(&text);
                Ok(Completion::Normal)
            }
            NodeKind::If => {
                let cond = self.operand(id, 0)?;
                let then_block = self.operand(id, 1)?;
                if self.eval(cond)?.to_bool() {
                    self.exec(then_block)
                } else if let Some(else_block) = ast.child(id, 2) {
                    self.exec(else_block)
                } else {
                    Ok(Completion::Normal)
                }
            }
            NodeKind::While => {
                let cond = self.operand(id, 0)?;
                let body = self.operand(id, 1)?;
                while self.eval(cond)?.to_bool() {
                    let completion = self.exec(body)?;
                    if completion.is_return() {
                        return Ok(completion);
                    }
                }
                Ok(Completion::Normal)
            }
            // Expressions in statement position run for their effects.
            NodeKind::Literal(_)
            | NodeKind::Variable { .. }
            | NodeKind::Unary { .. }
            | NodeKind::Binary { .. }
            | NodeKind::MemberAccess { .. }
            | NodeKind::Call
            | NodeKind::New { .. }
            | NodeKind::This => {
                self.eval(id)?;
                Ok(Completion::Normal)
            }
        }
    }

    /// Validate the type and bind a fresh `undefined` variable.
    fn declare(&mut self, id: NodeId, name: Name, ty: TypeRef) -> EvalResult<Variable> {
        self.ensure_type(id, ty)?;
        let var = Variable::undefined(name, ty);
        self.define(id, var.clone());
        Ok(var)
    }

    /// `receiver.member = value`: only members stored on the instance itself
    /// can be written.
    fn exec_member_assignment(&mut self, id: NodeId, line: u32) -> EvalResult<()> {
        let target = self.operand(id, 0)?;
        let NodeKind::MemberAccess { member } = *self.ast.kind(target) else {
            return Err(malformed_tree(self.ast.kind(id).describe(), line));
        };
        let receiver = self.eval(self.operand(target, 0)?)?;
        let Some(object) = receiver.to_object() else {
            return Err(cast_to_object(
                &receiver.display(self.interner).to_string(),
                line,
            ));
        };
        let value = self.eval(self.operand(id, 1)?)?;
        let Some(var) = object.own_member(member) else {
            return Err(no_member(
                object.class_label(self.interner),
                self.interner.lookup(member),
                line,
            ));
        };
        self.assign(&var, value, line)
    }

    fn declare_function(&mut self, id: NodeId, decl: &FunctionDecl, line: u32) {
        tracing::debug!(name = self.interner.lookup(decl.name), line, "declare function");
        let func = FunctionValue::from_decl(decl, line);
        self.define(
            id,
            Variable::new(decl.name, TypeRef::Function, Value::function(func)),
        );
    }

    fn declare_class(&mut self, id: NodeId, decl: &ClassDecl, line: u32) -> EvalResult<()> {
        let ctor = self.constructor_name;

        for field in &decl.fields {
            self.ensure_type(id, field.ty)?;
        }
        for method in decl.methods.iter().filter(|m| m.name != ctor) {
            for param in &method.params {
                self.ensure_type(id, param.ty)?;
            }
            if let Some(ty) = method.return_type {
                self.ensure_type(id, ty)?;
            }
        }

        let mut constructor = None;
        let mut methods = Vec::with_capacity(decl.methods.len());
        for method in &decl.methods {
            let func = FunctionValue::from_decl(method, self.ast.line(method.body));
            if method.name != ctor {
                methods.push(func);
            } else if constructor.replace(func).is_some() {
                return Err(multiple_constructors(
                    self.interner.lookup(decl.name),
                    line,
                ));
            }
        }

        tracing::debug!(
            name = self.interner.lookup(decl.name),
            line,
            fields = decl.fields.len(),
            methods = methods.len(),
            "declare class"
        );
        let class = ClassValue::new(decl.name, line, decl.fields.clone(), methods, constructor, ctor);
        self.define(
            id,
            Variable::new(decl.name, TypeRef::Class, Value::class(class)),
        );
        Ok(())
    }
}
