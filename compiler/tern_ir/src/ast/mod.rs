//! Node kinds of the Tern syntax tree.
//!
//! Operands are never stored inside a `NodeKind`: they are the node's
//! children in the arena, in source order. The per-kind child layout is
//! documented on each variant.

mod items;
mod operators;

pub use items::{ClassDecl, FieldDecl, FunctionDecl, MethodDecl, Param, TypeRef};
pub use operators::{BinaryOp, UnaryOp};

use crate::Name;

/// Literal values.
///
/// Numbers are stored as `u64` bits so the type keeps `Eq` and `Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Boolean(bool),
    Number(u64),
    String(String),
    Null,
    Undefined,
}

impl Literal {
    /// Create a number literal.
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

/// Statement and expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    // Statements
    /// Statement list; the only scope-bearing kind.
    /// Children: statements.
    Block,
    /// Children: `[expr]`.
    ExpressionStatement,
    /// `var name: ty;` No children.
    VarDeclaration { name: Name, ty: TypeRef },
    /// `var name: ty = value;` Children: `[value]`.
    DeclaredAssignment { name: Name, ty: TypeRef },
    /// `name = value;` Children: `[value]`.
    Assignment { name: Name },
    /// `receiver.member = value;` Children: `[MemberAccess, value]`.
    MemberAssignment,
    /// Children: `[body]`.
    FunctionDeclaration(FunctionDecl),
    /// Children: one body `Block` per method, in declaration order.
    ClassDeclaration(ClassDecl),
    /// Children: `[expr]`.
    Return,
    /// Children: `[expr]`.
    Print,
    /// Children: `[condition, then]` or `[condition, then, else]`.
    If,
    /// Children: `[condition, body]`.
    While,

    // Expressions
    Literal(Literal),
    Variable { name: Name },
    /// Children: `[operand]`.
    Unary { op: UnaryOp },
    /// Children: `[left, right]`.
    Binary { op: BinaryOp },
    /// Children: `[receiver]`.
    MemberAccess { member: Name },
    /// Children: `[callee, args...]`.
    Call,
    /// Children: `[args...]`.
    New { class: Name },
    This,
}

impl NodeKind {
    /// Whether this kind owns a scope.
    #[inline]
    pub fn is_scope(&self) -> bool {
        matches!(self, NodeKind::Block)
    }

    /// Short description used in logs.
    pub fn describe(&self) -> &'static str {
        match self {
            NodeKind::Block => "block",
            NodeKind::ExpressionStatement => "expression statement",
            NodeKind::VarDeclaration { .. } => "variable declaration",
            NodeKind::DeclaredAssignment { .. } => "declared variable assignment",
            NodeKind::Assignment { .. } => "variable assignment",
            NodeKind::MemberAssignment => "member assignment",
            NodeKind::FunctionDeclaration(_) => "function declaration",
            NodeKind::ClassDeclaration(_) => "class declaration",
            NodeKind::Return => "return statement",
            NodeKind::Print => "print statement",
            NodeKind::If => "if statement",
            NodeKind::While => "while loop",
            NodeKind::Literal(_) => "primitive value",
            NodeKind::Variable { .. } => "variable",
            NodeKind::Unary { op: UnaryOp::Not } => "boolean negation",
            NodeKind::Unary { op: UnaryOp::Neg } => "negation",
            NodeKind::Binary { .. } => "binary operation",
            NodeKind::MemberAccess { .. } => "member access",
            NodeKind::Call => "function call",
            NodeKind::New { .. } => "new instance",
            NodeKind::This => "this",
        }
    }
}
