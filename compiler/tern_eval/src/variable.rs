//! Named, typed, mutable storage cells.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tern_ir::{Name, TypeRef};

use crate::Value;

struct Slot {
    name: Name,
    ty: TypeRef,
    value: RefCell<Value>,
}

/// A variable binding: `(name, declared type, current value)`.
///
/// Cloning a `Variable` aliases the same cell, so an assignment through any
/// clone is observed by every scope or object holding it. Fresh cells are
/// only created by declarations, parameter binding and instantiation.
#[derive(Clone)]
pub struct Variable(Rc<Slot>);

impl Variable {
    /// Create a variable holding `value`.
    pub fn new(name: Name, ty: TypeRef, value: Value) -> Self {
        Variable(Rc::new(Slot {
            name,
            ty,
            value: RefCell::new(value),
        }))
    }

    /// Create a variable holding `undefined`.
    pub fn undefined(name: Name, ty: TypeRef) -> Self {
        Self::new(name, ty, Value::Undefined)
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.0.name
    }

    #[inline]
    pub fn ty(&self) -> TypeRef {
        self.0.ty
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> Value {
        self.0.value.borrow().clone()
    }

    /// Overwrite the value in place. Type checks are the caller's job.
    #[inline]
    pub fn set(&self, value: Value) {
        *self.0.value.borrow_mut() = value;
    }

    /// Whether both handles refer to the same cell.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.0.name)
            .field("ty", &self.0.ty)
            .field("value", &*self.0.value.borrow())
            .finish()
    }
}
