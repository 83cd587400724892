//! Declared types and declaration payloads.
//!
//! Function and method bodies are `Block` nodes in the arena. The payloads
//! here hold their `NodeId`; the declaring node also owns the body as a child
//! so that name resolution inside the body walks up through the declaration.

use crate::{Name, NodeId, StringInterner};

/// Declared type of a variable, field, parameter or return value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Boolean,
    Number,
    String,
    /// Accepts every value.
    Any,
    /// Binding type of a function declaration. Never written in source.
    Function,
    /// Binding type of a class declaration. Never written in source.
    Class,
    /// A user class, looked up by name at the point of use.
    Named(Name),
}

impl TypeRef {
    /// Map a source type name onto a `TypeRef`.
    ///
    /// Anything that is not a primitive keyword is treated as a class name,
    /// including `function` and `class`.
    pub fn from_source(name: &str, interner: &StringInterner) -> Self {
        match name {
            "boolean" => TypeRef::Boolean,
            "number" => TypeRef::Number,
            "string" => TypeRef::String,
            "any" => TypeRef::Any,
            other => TypeRef::Named(interner.intern(other)),
        }
    }

    /// Source-level spelling of the type.
    pub fn as_str<'a>(&self, interner: &'a StringInterner) -> &'a str {
        match self {
            TypeRef::Boolean => "boolean",
            TypeRef::Number => "number",
            TypeRef::String => "string",
            TypeRef::Any => "any",
            TypeRef::Function => "function",
            TypeRef::Class => "class",
            TypeRef::Named(name) => interner.lookup(*name),
        }
    }
}

/// A function or method parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: TypeRef,
}

/// Signature and body of a function or method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Param>,
    /// `None` for constructors and functions declared without a return type.
    pub return_type: Option<TypeRef>,
    /// The body `Block`.
    pub body: NodeId,
}

/// A field template in a class declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: TypeRef,
}

/// A method in a class declaration; a method named `constructor` is the
/// class constructor.
pub type MethodDecl = FunctionDecl;

/// Class declaration payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDecl {
    pub name: Name,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Methods (including constructors) in declaration order.
    pub methods: Vec<MethodDecl>,
}
