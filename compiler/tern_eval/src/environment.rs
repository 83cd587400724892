//! Scopes and the scope chain.
//!
//! Only `Block` nodes carry a scope. Their bindings live here, keyed by the
//! block's `NodeId`, as a stack of frames with one frame per call activation.
//! A function body gets a fresh frame on every call, so recursive calls never
//! share parameters or locals. Any other block opens its frame the first time
//! it is entered during a call and keeps it until that call returns; a loop
//! body sees the bindings of its previous iterations. Top-level blocks keep
//! their frames for the life of the environment.
//!
//! Resolution walks `Ast::scope_chain` from the node being evaluated and
//! consults the innermost frame of each block on the way.

use rustc_hash::FxHashMap;

use tern_ir::{Ast, Name, NodeId};

use crate::{Value, Variable};

/// Bindings of one block activation.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Variable>,
    /// Receiver of the method call this frame belongs to, if any.
    this: Option<Value>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the body scope of a method call.
    pub fn with_this(this: Option<Value>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            this,
        }
    }

    /// Bind a variable, replacing any binding of the same name.
    #[inline]
    pub fn define(&mut self, var: Variable) {
        self.bindings.insert(var.name(), var);
    }

    /// Look up a variable bound directly in this scope.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Variable> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn this(&self) -> Option<&Value> {
        self.this.as_ref()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Active frames of every block, keyed by block node.
#[derive(Default)]
pub struct Environment {
    frames: FxHashMap<NodeId, Vec<Scope>>,
    /// Blocks whose frames each active call opened, innermost call last.
    calls: Vec<Vec<NodeId>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a function body with a fresh frame.
    pub fn enter_call(&mut self, body: NodeId, scope: Scope) {
        self.push_scope(body, scope);
        self.calls.push(vec![body]);
    }

    /// Leave the innermost call, closing every frame it opened.
    pub fn exit_call(&mut self) {
        if let Some(opened) = self.calls.pop() {
            for block in opened {
                self.pop_scope(block);
            }
        }
    }

    /// Enter a block that is not a function body.
    ///
    /// Re-entering the block within the same call reuses its frame.
    pub fn enter_block(&mut self, block: NodeId) {
        match self.calls.last_mut() {
            Some(opened) if opened.contains(&block) => {}
            Some(opened) => {
                opened.push(block);
                self.frames.entry(block).or_default().push(Scope::new());
            }
            None => self.ensure_scope(block),
        }
    }

    fn push_scope(&mut self, block: NodeId, scope: Scope) {
        self.frames.entry(block).or_default().push(scope);
    }

    fn pop_scope(&mut self, block: NodeId) {
        if let Some(stack) = self.frames.get_mut(&block) {
            stack.pop();
            if stack.is_empty() {
                self.frames.remove(&block);
            }
        }
    }

    /// Make sure a block has a frame, creating an empty one if needed.
    ///
    /// Used for the root block, whose frame outlives `execute`.
    pub fn ensure_scope(&mut self, block: NodeId) {
        let stack = self.frames.entry(block).or_default();
        if stack.is_empty() {
            stack.push(Scope::new());
        }
    }

    /// The innermost activation of a block.
    pub fn current(&self, block: NodeId) -> Option<&Scope> {
        self.frames.get(&block).and_then(|stack| stack.last())
    }

    fn current_mut(&mut self, block: NodeId) -> Option<&mut Scope> {
        self.frames.get_mut(&block).and_then(|stack| stack.last_mut())
    }

    /// Find the nearest binding of `name` visible from `from`.
    ///
    /// The variable itself is returned, so assigning through it updates
    /// the binding.
    pub fn resolve(&self, ast: &Ast, from: NodeId, name: Name) -> Option<Variable> {
        ast.scope_chain(from)
            .filter_map(|block| self.current(block))
            .find_map(|scope| scope.lookup(name))
            .cloned()
    }

    /// Bind `var` in the nearest block enclosing `from`.
    ///
    /// Returns `false` if `from` has no active enclosing block.
    pub fn define(&mut self, ast: &Ast, from: NodeId, var: Variable) -> bool {
        let Some(block) = ast
            .scope_chain(from)
            .find(|&block| self.current(block).is_some())
        else {
            return false;
        };
        match self.current_mut(block) {
            Some(scope) => {
                scope.define(var);
                true
            }
            None => false,
        }
    }

    /// Receiver of the nearest enclosing method call, `Undefined` if none.
    pub fn this(&self, ast: &Ast, from: NodeId) -> Value {
        ast.scope_chain(from)
            .filter_map(|block| self.current(block))
            .find_map(Scope::this)
            .cloned()
            .unwrap_or(Value::Undefined)
    }
}
