//! Runtime values for the Tern interpreter.
//!
//! Primitives, `null` and `undefined` are copied by value. Strings, objects,
//! functions and classes live behind `Heap<T>` and are shared by every
//! variable that holds them; heap values are created only through the factory
//! methods on `Value`.
//!
//! Every place that branches on the kind of a value matches on `Value`
//! directly, so adding a kind is a compile error until each site handles it.

mod heap;
mod object;

use std::fmt;

use tern_ir::{Literal, StringInterner, TypeRef};

pub use heap::Heap;
pub use object::{ClassValue, FunctionValue, ObjectRef, ObjectValue};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Str(Heap<str>),
    /// Class instance.
    Object(Heap<ObjectValue>),
    Function(Heap<FunctionValue>),
    Class(Heap<ClassValue>),
    Null,
    Undefined,
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::from_string(s.into()))
    }

    /// Create an instance value.
    #[inline]
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }

    /// Create a function value.
    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(Heap::new(func))
    }

    /// Create a class value.
    #[inline]
    pub fn class(class: ClassValue) -> Self {
        Value::Class(Heap::new(class))
    }

    /// The value a literal evaluates to.
    pub fn from_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::Number(bits) => Value::Number(f64::from_bits(*bits)),
            Literal::String(s) => Value::string(s.as_str()),
            Literal::Null => Value::Null,
            Literal::Undefined => Value::Undefined,
        }
    }
}

// Coercions

impl Value {
    /// Truthiness. Total; never fails.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Object(_) | Value::Function(_) | Value::Class(_) => true,
            Value::Null | Value::Undefined => false,
        }
    }

    /// Numeric coercion. Total; never fails.
    ///
    /// Strings that do not parse as a number coerce to `0`; `undefined`
    /// coerces to `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => s.trim().parse().unwrap_or(0.0),
            Value::Object(_) | Value::Function(_) | Value::Class(_) | Value::Null => 0.0,
            Value::Undefined => f64::NAN,
        }
    }

    /// Cast to an object. `None` for primitives, `null` and `undefined`.
    pub fn to_object(&self) -> Option<ObjectRef> {
        match self {
            Value::Object(object) => Some(ObjectRef::Instance(object.clone())),
            Value::Function(func) => Some(ObjectRef::Function(func.clone())),
            Value::Class(class) => Some(ObjectRef::Class(class.clone())),
            Value::Bool(_) | Value::Number(_) | Value::Str(_) | Value::Null | Value::Undefined => {
                None
            }
        }
    }
}

// Type checks

impl Value {
    /// Whether this value may be stored in a binding declared as `ty`.
    ///
    /// `null` and `undefined` fit every type; `any` accepts every value.
    pub fn conforms_to(&self, ty: TypeRef) -> bool {
        if ty == TypeRef::Any {
            return true;
        }
        match self {
            Value::Null | Value::Undefined => true,
            Value::Bool(_) => ty == TypeRef::Boolean,
            Value::Number(_) => ty == TypeRef::Number,
            Value::Str(_) => ty == TypeRef::String,
            Value::Object(object) => ty == TypeRef::Named(object.class().name()),
            Value::Function(_) => ty == TypeRef::Function,
            Value::Class(_) => ty == TypeRef::Class,
        }
    }

    /// Textual form used by `print` and error messages.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
            nested: false,
        }
    }
}

/// Format a number: integral values without a fraction, JS spellings for
/// the non-finite values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{n}")
    }
}

/// `Display` adapter returned by `Value::display`.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
    nested: bool,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = self.interner;
        match self.value {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Object(object) => {
                let class = interner.lookup(object.class().name());
                // Fields may hold the object itself; only the outer level
                // is expanded.
                if self.nested {
                    return write!(f, "{class} {{...}}");
                }
                write!(f, "{class} {{")?;
                for (i, field) in object.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let value = field.get();
                    let shown = ValueDisplay {
                        value: &value,
                        interner,
                        nested: true,
                    };
                    write!(f, "{}: {shown}", interner.lookup(field.name()))?;
                }
                f.write_str("}")
            }
            Value::Function(func) => write!(f, "function {}", interner.lookup(func.name)),
            Value::Class(class) => write!(f, "class {}", interner.lookup(class.name())),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Object(object) => write!(f, "Object({object:?})"),
            Value::Function(func) => write!(f, "Function({:?})", func.name),
            Value::Class(class) => write!(f, "Class({:?})", class.name()),
            Value::Null => f.write_str("Null"),
            Value::Undefined => f.write_str("Undefined"),
        }
    }
}

/// Primitives compare by value; heap values by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Heap::ptr_eq(a, b),
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }
}
