//! Node IDs for the flat syntax tree.

use std::fmt;

/// Index into the node arena.
///
/// - Memory: 4 bytes instead of a boxed node
/// - Equality: O(1) integer compare
/// - Parent links are stored as `NodeId`, so the tree has no ownership cycles
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
