//! Shared heap handle for reference-like values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted handle for strings, objects, functions and classes.
///
/// The constructor is restricted to the `value` module, so every heap value
/// is created through a `Value` factory method. Clones share the allocation;
/// identity comparisons go through `Heap::ptr_eq`.
///
/// Evaluation is single-threaded, so this wraps `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(super) fn from_string(value: String) -> Self {
        Heap(Rc::from(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
