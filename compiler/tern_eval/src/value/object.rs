//! Objects, functions and classes.
//!
//! Functions and classes are objects too: anything that casts to an
//! `ObjectRef` supports member reads, and a call target must be an
//! `ObjectRef::Function`.

use std::fmt;

use tern_ir::{FieldDecl, FunctionDecl, Name, NodeId, Param, StringInterner, TypeRef};

use super::{Heap, Value};
use crate::Variable;

/// A user-defined function or method.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    pub name: Name,
    pub params: Vec<Param>,
    /// Declared return type. Not enforced on return.
    pub return_type: Option<TypeRef>,
    /// Body block; `None` for a synthesized constructor.
    pub body: Option<NodeId>,
    /// Line of the declaration.
    pub line: u32,
}

impl FunctionValue {
    /// Build a function from its declaration.
    pub fn from_decl(decl: &FunctionDecl, line: u32) -> Self {
        FunctionValue {
            name: decl.name,
            params: decl.params.clone(),
            return_type: decl.return_type,
            body: Some(decl.body),
            line,
        }
    }

    /// The zero-argument constructor given to classes that declare none.
    pub fn empty_constructor(name: Name, line: u32) -> Self {
        FunctionValue {
            name,
            params: Vec::new(),
            return_type: None,
            body: None,
            line,
        }
    }
}

/// A class: field templates, method table and constructor.
pub struct ClassValue {
    name: Name,
    fields: Vec<FieldDecl>,
    methods: Vec<Variable>,
    constructor: Heap<FunctionValue>,
}

impl ClassValue {
    /// Build a class. A missing constructor is replaced with a no-op one.
    ///
    /// Rejecting a second constructor is the caller's job: this takes at
    /// most one.
    pub fn new(
        name: Name,
        line: u32,
        fields: Vec<FieldDecl>,
        methods: Vec<FunctionValue>,
        constructor: Option<FunctionValue>,
        constructor_name: Name,
    ) -> Self {
        let mut table: Vec<Variable> = Vec::with_capacity(methods.len());
        for method in methods {
            let var = Variable::new(method.name, TypeRef::Function, Value::function(method));
            match table.iter_mut().find(|m| m.name() == var.name()) {
                Some(slot) => *slot = var,
                None => table.push(var),
            }
        }
        let constructor = constructor
            .unwrap_or_else(|| FunctionValue::empty_constructor(constructor_name, line));
        ClassValue {
            name,
            fields,
            methods: table,
            constructor: Heap::new(constructor),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Field templates in declaration order.
    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Look up a method by name.
    pub fn method(&self, name: Name) -> Option<&Variable> {
        self.methods.iter().find(|m| m.name() == name)
    }

    pub fn constructor(&self) -> &Heap<FunctionValue> {
        &self.constructor
    }

    /// Fresh `undefined` variables, one per field template.
    ///
    /// A repeated field name keeps its first position and the last
    /// declaration's type.
    fn materialize_fields(&self) -> Vec<Variable> {
        let mut fields: Vec<Variable> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let var = Variable::undefined(field.name, field.ty);
            match fields.iter_mut().find(|f| f.name() == field.name) {
                Some(slot) => *slot = var,
                None => fields.push(var),
            }
        }
        fields
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassValue")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("methods", &self.methods.len())
            .finish_non_exhaustive()
    }
}

/// An instance of a class.
pub struct ObjectValue {
    class: Heap<ClassValue>,
    fields: Vec<Variable>,
}

impl ObjectValue {
    /// Allocate an instance with its own field variables.
    pub fn new(class: Heap<ClassValue>) -> Self {
        let fields = class.materialize_fields();
        ObjectValue { class, fields }
    }

    pub fn class(&self) -> &Heap<ClassValue> {
        &self.class
    }

    /// Instance storage in declaration order.
    pub fn fields(&self) -> &[Variable] {
        &self.fields
    }

    /// Look up a member on the instance itself.
    pub fn field(&self, name: Name) -> Option<&Variable> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fields may point back at this object; print names only.
        f.debug_struct("ObjectValue")
            .field("class", &self.class.name)
            .field(
                "fields",
                &self.fields.iter().map(Variable::name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A value that was successfully cast to an object.
#[derive(Clone, Debug)]
pub enum ObjectRef {
    Instance(Heap<ObjectValue>),
    Function(Heap<FunctionValue>),
    Class(Heap<ClassValue>),
}

impl ObjectRef {
    /// Read lookup: instance storage first, then the class's method table.
    pub fn member(&self, name: Name) -> Option<Variable> {
        match self {
            ObjectRef::Instance(object) => object
                .field(name)
                .or_else(|| object.class().method(name))
                .cloned(),
            ObjectRef::Function(_) => None,
            ObjectRef::Class(class) => class.method(name).cloned(),
        }
    }

    /// Write lookup: only members stored on the instance itself.
    pub fn own_member(&self, name: Name) -> Option<Variable> {
        match self {
            ObjectRef::Instance(object) => object.field(name).cloned(),
            ObjectRef::Function(_) | ObjectRef::Class(_) => None,
        }
    }

    /// Name used for the object's class in error messages.
    pub fn class_label<'a>(&self, interner: &'a StringInterner) -> &'a str {
        match self {
            ObjectRef::Instance(object) => interner.lookup(object.class().name()),
            ObjectRef::Function(_) => "function",
            ObjectRef::Class(_) => "class",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ObjectRef::Instance(object) => Value::Object(object),
            ObjectRef::Function(func) => Value::Function(func),
            ObjectRef::Class(class) => Value::Class(class),
        }
    }
}
