//! Ancestor walks by repeated halving
//!
//! The parent of R is ⌊R / 2⌋, so the whole root path is recomputed
//! from the id alone. Depth of the walk: O(h).

use super::NodeId;

/// Iterator over the proper ancestors of a node, nearest first, root last
#[derive(Debug, Clone)]
pub struct Ancestors {
    current: NodeId,
}

impl Ancestors {
    pub(super) fn new(node: NodeId) -> Self {
        Self { current: node }
    }
}

impl Iterator for Ancestors {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let parent = self.current.parent()?;
        self.current = parent;
        Some(parent)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One ancestor per layer above the node.
        let remaining = self.current.depth() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors {}

/// Check whether `descendant` lies strictly below `ancestor`
///
/// Halves the descendant candidate until it is no longer above the
/// ancestor candidate, then compares.
pub fn is_descendant_of(descendant: u64, ancestor: u64) -> bool {
    let mut parent = descendant / 2;
    while parent > ancestor {
        parent /= 2;
    }
    parent == ancestor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestor_chain() {
        let chain: Vec<u64> = NodeId::new(13).ancestors().map(NodeId::get).collect();
        assert_eq!(chain, vec![6, 3, 1]);
        assert_eq!(NodeId::new(13).ancestors().len(), 3);
        assert_eq!(NodeId::ROOT.ancestors().count(), 0);
    }

    #[test]
    fn test_is_descendant_of() {
        assert!(is_descendant_of(4, 2));
        assert!(is_descendant_of(9, 2));
        assert!(is_descendant_of(9, 1));
        assert!(!is_descendant_of(6, 2));
        assert!(!is_descendant_of(2, 2));
        assert!(!is_descendant_of(2, 4));
    }
}
