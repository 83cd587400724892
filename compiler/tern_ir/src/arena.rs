//! Node arena with parent back-references.
//!
//! Every node is owned by the `Ast`. A node lists its children in source
//! order and records its parent's `NodeId`, set exactly once by `attach`.

use thiserror::Error;

use crate::{NodeId, NodeKind};

/// Error raised while assembling a tree.
///
/// These are front-end bugs, not semantic errors in the program being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("node {child:?} is already attached to {parent:?}")]
    AlreadyAttached { child: NodeId, parent: NodeId },
    #[error("cannot attach {0:?} to itself")]
    SelfAttach(NodeId),
    #[error("attaching {child:?} under {parent:?} would make {child:?} its own ancestor")]
    Cycle { child: NodeId, parent: NodeId },
    #[error("trying to add 'else' block when it already exists")]
    DuplicateElse,
    #[error("node {0:?} is not an if statement")]
    NotAnIf(NodeId),
}

/// A tree element.
#[derive(Clone, Debug)]
pub struct Node {
    /// Source line the node was parsed from.
    pub line: u32,
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Children in source order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena owning every node of one program.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Allocation =====

    /// Allocate a detached node.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` nodes.
    pub fn alloc(&mut self, line: u32, kind: NodeKind) -> NodeId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("node arena exceeded {} nodes", u32::MAX));
        self.nodes.push(Node {
            line,
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId::new(index)
    }

    /// Allocate a node and attach `children` to it in order.
    pub fn alloc_with(
        &mut self,
        line: u32,
        kind: NodeKind,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<NodeId, BuildError> {
        let id = self.alloc(line, kind);
        for child in children {
            self.attach(id, child)?;
        }
        Ok(id)
    }

    /// Make `child` the last child of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), BuildError> {
        if parent == child {
            return Err(BuildError::SelfAttach(child));
        }
        if let Some(existing) = self.nodes[child.index()].parent {
            return Err(BuildError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if self.ancestors(parent).any(|id| id == child) {
            return Err(BuildError::Cycle { child, parent });
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Attach the `else` block of an `if` statement.
    pub fn attach_else(&mut self, if_node: NodeId, block: NodeId) -> Result<(), BuildError> {
        let node = &self.nodes[if_node.index()];
        if !matches!(node.kind, NodeKind::If) {
            return Err(BuildError::NotAnIf(if_node));
        }
        if node.children.len() != 2 {
            return Err(BuildError::DuplicateElse);
        }
        self.attach(if_node, block)
    }

    // ===== Queries =====

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node's kind.
    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// Get a node's source line.
    #[inline]
    #[track_caller]
    pub fn line(&self, id: NodeId) -> u32 {
        self.nodes[id.index()].line
    }

    /// Get a node's parent.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Children of a node in source order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// The `index`th child of a node.
    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[id.index()].children.get(index).copied()
    }

    /// Whether the node owns a scope.
    #[inline]
    pub fn is_scope(&self, id: NodeId) -> bool {
        self.nodes[id.index()].kind.is_scope()
    }

    // ===== Traversal =====

    /// The node itself followed by each ancestor up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            ast: self,
            next: Some(id),
        }
    }

    /// Scope-bearing nodes from `id` outwards (including `id` itself).
    pub fn scope_chain(&self, id: NodeId) -> ScopeChain<'_> {
        ScopeChain {
            inner: self.ancestors(id),
        }
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator returned by `Ast::ancestors`.
pub struct Ancestors<'a> {
    ast: &'a Ast,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.ast.parent(current);
        Some(current)
    }
}

/// Iterator returned by `Ast::scope_chain`.
pub struct ScopeChain<'a> {
    inner: Ancestors<'a>,
}

impl Iterator for ScopeChain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let ast = self.inner.ast;
        self.inner.by_ref().find(|&id| ast.is_scope(id))
    }
}

#[cfg(test)]
mod tests;
