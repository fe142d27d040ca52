//! Perfect binary tree T(h)
//!
//! Implicit representation: no tree is ever stored.
//! Nodes are integers 1..2^(h+1)-1 with heap numbering:
//!   Root: 1
//!   Left child of R: 2R
//!   Right child of R: 2R+1

mod ancestry;
mod node;

pub use ancestry::{is_descendant_of, Ancestors};
pub use node::NodeId;

/// Largest supported height; keeps `2^(h+1)` inside `u64`.
///
/// Coloring stores every node, so heights past the low 30s exceed the
/// memory of ordinary machines; such runs fail with
/// [`ColoringError::Allocation`](crate::ColoringError::Allocation).
pub const MAX_HEIGHT: u32 = 62;

/// Number of non-root nodes of T(h): `2^(h+1) - 2`
#[inline]
pub fn total_nodes(height: u32) -> u64 {
    debug_assert!(height <= MAX_HEIGHT, "height {} exceeds {}", height, MAX_HEIGHT);
    (1u64 << (height + 1)) - 2
}

/// Perfect binary tree of a fixed height (implicit)
///
/// Never materialized - all navigation via arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerfectTree {
    height: u32,
}

impl PerfectTree {
    /// Create the implicit tree T(h)
    pub fn new(height: u32) -> Self {
        debug_assert!(height <= MAX_HEIGHT);
        Self { height }
    }

    /// Count of colorable (non-root) nodes
    pub fn colorable_nodes(&self) -> u64 {
        total_nodes(self.height)
    }

    /// Largest node id: `2^(h+1) - 1`
    pub fn max_node_id(&self) -> u64 {
        total_nodes(self.height) + 1
    }

    /// Whether `id` names a non-root node of this tree
    pub fn contains_colorable(&self, id: u64) -> bool {
        (2..=self.max_node_id()).contains(&id)
    }
}
