//! Tree-walking interpreter for Tern.
//!
//! # Architecture
//!
//! - `exec_stmt.rs`: statements, returning a `Completion`
//! - `eval_expr.rs`: expressions, returning a `Value`
//! - `function_call.rs`: calls, instantiation and the call-depth limit
//!
//! Scopes are not stored on the tree. Each `Block` gets a frame in the
//! `Environment`: a function body a fresh one per call, any other block one
//! per enclosing call, reused on re-entry. The root block's frame is kept
//! after `execute` returns so the driver can read final bindings.
//!
//! Every error aborts execution: nothing inside the interpreter catches an
//! `EvalError`.

mod builder;
mod eval_expr;
mod exec_stmt;
mod function_call;

pub use builder::InterpreterBuilder;

use tern_ir::{Ast, Name, NodeId, StringInterner, TypeRef};

use crate::errors::{malformed_tree, undeclared_class, undeclared_variable};
use crate::print_handler::SharedPrintHandler;
use crate::{Completion, Environment, EvalError, EvalResult, ExecResult, Scope, Value, Variable};

/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Tree-walking interpreter over one `Ast`.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) ast: &'a Ast,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    /// Pre-interned `constructor` keyword.
    pub(crate) constructor_name: Name,
    /// Number of active function activations.
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: Option<usize>,
    /// Root block of the last `execute`, whose frame is retained.
    root: Option<NodeId>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default settings (stdout output).
    pub fn new(interner: &'a StringInterner, ast: &'a Ast) -> Self {
        InterpreterBuilder::new(interner, ast).build()
    }

    /// Execute a program rooted at `root`.
    ///
    /// `root` is normally a `Block`; its frame survives the call. Executing
    /// the same root again reuses that frame, so earlier bindings stay
    /// visible.
    #[tracing::instrument(level = "debug", skip(self), fields(nodes = self.ast.len()))]
    pub fn execute(&mut self, root: NodeId) -> Result<(), EvalError> {
        let completion = if self.ast.is_scope(root) {
            self.root = Some(root);
            self.env.ensure_scope(root);
            self.run_statements(root)?
        } else {
            self.exec(root)?
        };
        // A top-level `return` is rejected when it runs, so nothing can
        // unwind this far.
        debug_assert!(!completion.is_return());
        Ok(())
    }

    /// Read a binding from the retained root frame.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let root = self.root?;
        let name = self.interner.intern(name);
        self.env
            .current(root)
            .and_then(|scope| scope.lookup(name))
            .map(Variable::get)
    }

    /// Get all captured print output.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Clear captured print output.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// The `index`th child of `id`, or a `MalformedTree` error.
    pub(crate) fn operand(&self, id: NodeId, index: usize) -> EvalResult<NodeId> {
        self.ast.child(id, index).ok_or_else(|| {
            let node = self.ast.node(id);
            malformed_tree(node.kind.describe(), node.line)
        })
    }

    /// Resolve `name` from `from`, failing with `UndeclaredVariable`.
    pub(crate) fn resolve(&self, from: NodeId, name: Name) -> EvalResult<Variable> {
        self.env
            .resolve(self.ast, from, name)
            .ok_or_else(|| undeclared_variable(self.interner.lookup(name), self.ast.line(from)))
    }

    /// Bind `var` in the nearest block enclosing `from`.
    pub(crate) fn define(&mut self, from: NodeId, var: Variable) {
        if !self.env.define(self.ast, from, var) {
            tracing::warn!(
                line = self.ast.line(from),
                "binding defined outside any active block; dropped"
            );
        }
    }

    /// Check that a declared type names a primitive or a class visible
    /// from `from`.
    ///
    /// `Function` and `Class` only type the bindings made by declarations,
    /// so they are rejected here.
    pub(crate) fn ensure_type(&self, from: NodeId, ty: TypeRef) -> EvalResult<()> {
        let line = self.ast.line(from);
        match ty {
            TypeRef::Boolean | TypeRef::Number | TypeRef::String | TypeRef::Any => Ok(()),
            TypeRef::Function | TypeRef::Class => {
                Err(undeclared_class(ty.as_str(self.interner), line))
            }
            TypeRef::Named(name) => {
                match self.env.resolve(self.ast, from, name).map(|var| var.get()) {
                    Some(Value::Class(_)) => Ok(()),
                    _ => Err(undeclared_class(self.interner.lookup(name), line)),
                }
            }
        }
    }

    /// Store `value` into `var` after checking it against the declared type.
    pub(crate) fn assign(&self, var: &Variable, value: Value, line: u32) -> EvalResult<()> {
        if !value.conforms_to(var.ty()) {
            return Err(crate::errors::type_mismatch(
                self.interner.lookup(var.name()),
                var.ty().as_str(self.interner),
                &value.display(self.interner).to_string(),
                line,
            ));
        }
        var.set(value);
        Ok(())
    }

    /// Run the statements of a block in its current frame.
    ///
    /// Stops at the first `Return` and hands it back.
    pub(crate) fn run_statements(&mut self, block: NodeId) -> ExecResult {
        let ast = self.ast;
        for &stmt in ast.children(block) {
            let completion = self.exec(stmt)?;
            if completion.is_return() {
                return Ok(completion);
            }
        }
        Ok(Completion::Normal)
    }

    /// Run a nested block in its frame for the current call.
    pub(crate) fn run_block(&mut self, block: NodeId) -> ExecResult {
        self.env.enter_block(block);
        self.run_statements(block)
    }

    /// Run a function body in a fresh frame holding `scope`.
    pub(crate) fn run_body(&mut self, body: NodeId, scope: Scope) -> ExecResult {
        self.env.enter_call(body, scope);
        let result = self.run_statements(body);
        self.env.exit_call();
        result
    }
}
