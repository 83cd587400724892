//! Stack growth for deeply nested programs.
//!
//! Statement execution and expression evaluation recurse on the tree, and
//! user recursion adds a Rust frame chain per call. Each recursive entry point
//! goes through `ensure_sufficient_stack`.

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when less than 100KB remain.
    const RED_ZONE: usize = 100 * 1024;

    /// Allocate 1MB per growth.
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
