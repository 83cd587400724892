#![expect(clippy::unwrap_used, reason = "tests build known-good trees")]

use super::*;
use crate::{Literal, StringInterner};
use pretty_assertions::assert_eq;

fn literal(ast: &mut Ast, line: u32, value: f64) -> NodeId {
    ast.alloc(line, NodeKind::Literal(Literal::number(value)))
}

#[test]
fn test_attach_sets_parent_and_preserves_order() {
    let mut ast = Ast::new();
    let first = literal(&mut ast, 1, 1.0);
    let second = literal(&mut ast, 2, 2.0);
    let block = ast.alloc_with(1, NodeKind::Block, [first, second]).unwrap();

    assert_eq!(ast.children(block), &[first, second]);
    assert_eq!(ast.parent(first), Some(block));
    assert_eq!(ast.parent(second), Some(block));
    assert_eq!(ast.parent(block), None);
    assert_eq!(ast.child(block, 1), Some(second));
    assert_eq!(ast.child(block, 2), None);
}

#[test]
fn test_reattaching_a_child_is_rejected() {
    let mut ast = Ast::new();
    let value = literal(&mut ast, 1, 1.0);
    let a = ast.alloc_with(1, NodeKind::Block, [value]).unwrap();
    let b = ast.alloc(2, NodeKind::Block);

    assert_eq!(
        ast.attach(b, value),
        Err(BuildError::AlreadyAttached {
            child: value,
            parent: a
        })
    );
    assert!(ast.children(b).is_empty());
}

#[test]
fn test_self_attach_is_rejected() {
    let mut ast = Ast::new();
    let block = ast.alloc(1, NodeKind::Block);
    assert_eq!(ast.attach(block, block), Err(BuildError::SelfAttach(block)));
}

#[test]
fn test_second_else_is_a_build_error() {
    let mut ast = Ast::new();
    let cond = ast.alloc(1, NodeKind::Literal(Literal::Boolean(true)));
    let then = ast.alloc(1, NodeKind::Block);
    let if_node = ast.alloc_with(1, NodeKind::If, [cond, then]).unwrap();

    let first_else = ast.alloc(2, NodeKind::Block);
    ast.attach_else(if_node, first_else).unwrap();

    let second_else = ast.alloc(3, NodeKind::Block);
    assert_eq!(
        ast.attach_else(if_node, second_else),
        Err(BuildError::DuplicateElse)
    );
    assert_eq!(ast.children(if_node).len(), 3);
}

#[test]
fn test_else_requires_an_if() {
    let mut ast = Ast::new();
    let block = ast.alloc(1, NodeKind::Block);
    let other = ast.alloc(1, NodeKind::Block);
    assert_eq!(ast.attach_else(block, other), Err(BuildError::NotAnIf(block)));
}

#[test]
fn test_scope_chain_skips_non_scope_nodes() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut ast = Ast::new();
    let read = ast.alloc(3, NodeKind::Variable { name: x });
    let print = ast.alloc_with(3, NodeKind::Print, [read]).unwrap();
    let inner = ast.alloc_with(2, NodeKind::Block, [print]).unwrap();
    let cond = ast.alloc(2, NodeKind::Literal(Literal::Boolean(true)));
    let while_node = ast.alloc_with(2, NodeKind::While, [cond, inner]).unwrap();
    let root = ast.alloc_with(1, NodeKind::Block, [while_node]).unwrap();

    let ancestors: Vec<_> = ast.ancestors(read).collect();
    assert_eq!(ancestors, vec![read, print, inner, while_node, root]);

    let scopes: Vec<_> = ast.scope_chain(read).collect();
    assert_eq!(scopes, vec![inner, root]);

    // A scope node is the first entry of its own chain.
    let scopes: Vec<_> = ast.scope_chain(inner).collect();
    assert_eq!(scopes, vec![inner, root]);
}

#[test]
fn test_children_iteration_is_restartable() {
    let mut ast = Ast::new();
    let a = literal(&mut ast, 1, 1.0);
    let b = literal(&mut ast, 1, 2.0);
    let call_args = ast.alloc_with(1, NodeKind::Block, [a, b]).unwrap();

    let first: Vec<_> = ast.children(call_args).iter().copied().collect();
    let second: Vec<_> = ast.children(call_args).iter().copied().collect();
    assert_eq!(first, second);
    assert_eq!(ast.len(), 3);
}

#[test]
fn test_attaching_an_ancestor_below_its_descendant_is_rejected() {
    let mut ast = Ast::new();
    let leaf = ast.alloc(3, NodeKind::Block);
    let inner = ast.alloc_with(2, NodeKind::Block, [leaf]).unwrap();
    let root = ast.alloc_with(1, NodeKind::Block, [inner]).unwrap();

    assert_eq!(
        ast.attach(leaf, root),
        Err(BuildError::Cycle {
            child: root,
            parent: leaf
        })
    );
    assert_eq!(ast.parent(root), None);
    assert!(ast.children(leaf).is_empty());
    // The chain still terminates.
    assert_eq!(ast.ancestors(leaf).count(), 3);
}
