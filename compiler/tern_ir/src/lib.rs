//! Tern IR - syntax tree types for the Tern evaluator.
//!
//! This crate contains the data the evaluator consumes:
//! - `Name` / `StringInterner` for interned identifiers
//! - `NodeId` indices into the node arena
//! - `Ast`, the arena that owns every node and records parent/child links
//! - `NodeKind` and the declaration payloads (`FunctionDecl`, `ClassDecl`)
//! - `TypeRef`, the declared type of a binding
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: nodes live in one `Vec`, linked by `NodeId`
//! - **Parents by index**: a child stores its parent's `NodeId`, never a
//!   pointer, so the tree has a single owner and no reference cycles
//!
//! Lexing and parsing live outside this workspace; a front end builds the tree
//! through `Ast::alloc` / `Ast::attach`.

mod arena;
pub mod ast;
mod interner;
mod name;
mod node_id;

pub use arena::{Ancestors, Ast, BuildError, Node, ScopeChain};
pub use ast::{
    BinaryOp, ClassDecl, FieldDecl, FunctionDecl, Literal, MethodDecl, NodeKind, Param, TypeRef,
    UnaryOp,
};
pub use interner::StringInterner;
pub use name::Name;
pub use node_id::NodeId;
