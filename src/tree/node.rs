//! Implicit tree node representation
//!
//! Node = heap index R ≥ 1
//! Children computed via doubling:
//!   Left child: 2R
//!   Right child: 2R + 1

use std::fmt;

use super::Ancestors;

/// Tree node (implicit - just a heap index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(u64);

impl NodeId {
    /// Root of every perfect binary tree
    pub const ROOT: NodeId = NodeId(1);

    /// Wrap a raw heap index
    #[inline]
    pub fn new(id: u64) -> Self {
        debug_assert!(id >= 1, "heap indices start at 1");
        Self(id)
    }

    /// Raw heap index
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Check if this is the root
    #[inline]
    pub fn is_root(self) -> bool {
        self.0 == 1
    }

    /// Get children: (2R, 2R+1)
    #[inline]
    pub fn children(self) -> (NodeId, NodeId) {
        (NodeId(self.0 << 1), NodeId((self.0 << 1) | 1))
    }

    /// Parent node, `None` for the root
    #[inline]
    pub fn parent(self) -> Option<NodeId> {
        if self.is_root() {
            None
        } else {
            Some(NodeId(self.0 >> 1))
        }
    }

    /// Depth below the root (root = 0)
    #[inline]
    pub fn depth(self) -> u32 {
        63 - self.0.leading_zeros()
    }

    /// Walk the ancestor chain upward, nearest first
    pub fn ancestors(self) -> Ancestors {
        Ancestors::new(self)
    }
}

impl From<NodeId> for u64 {
    fn from(node: NodeId) -> u64 {
        node.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
