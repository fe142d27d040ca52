//! Structural checks over a finished coloring

use bitvec::prelude::*;

use super::VerificationError;
use crate::splitter::Coloring;
use crate::tree::{total_nodes, NodeId, PerfectTree, MAX_HEIGHT};

/// Coverage and range:
/// 1. one class per layer (h classes)
/// 2. every id lies in [2, 2^(h+1) - 1]
/// 3. the total equals the number of non-root nodes
/// 4. no id is assigned twice
pub fn check_node_ids(coloring: &Coloring) -> Result<(), VerificationError> {
    let height = coloring.height();
    if height > MAX_HEIGHT {
        return Err(VerificationError::UnsupportedHeight { height });
    }
    let tree = PerfectTree::new(height);

    if coloring.classes().len() != height as usize {
        return Err(VerificationError::ClassCount {
            expected: height,
            actual: coloring.classes().len(),
        });
    }

    for class in coloring.classes() {
        if let Some(node) = class
            .nodes()
            .iter()
            .find(|node| !tree.contains_colorable(node.get()))
        {
            return Err(VerificationError::OutOfRange {
                color: class.color(),
                node: node.get(),
                max: tree.max_node_id(),
            });
        }
    }

    // Count first so the presence marker is only sized for a plausible tree.
    let assigned = coloring.assigned();
    if assigned != tree.colorable_nodes() {
        return Err(VerificationError::TotalMismatch {
            assigned,
            expected: tree.colorable_nodes(),
        });
    }

    let mut allocated = bitvec![0; tree.max_node_id() as usize + 1];
    for class in coloring.classes() {
        for node in class.nodes() {
            let idx = node.get() as usize;
            if allocated[idx] {
                return Err(VerificationError::Duplicate { node: node.get() });
            }
            allocated.set(idx, true);
        }
    }

    Ok(())
}

/// Every class holds exactly the size its sequence entry declared.
pub fn check_declared_sizes(coloring: &Coloring) -> Result<(), VerificationError> {
    match coloring.classes().iter().find(|class| !class.is_full()) {
        Some(class) => Err(VerificationError::DeclaredSize {
            color: class.color(),
            declared: class.declared(),
            actual: class.len(),
        }),
        None => Ok(()),
    }
}

/// Every class has ⌊T/h⌋ or ⌈T/h⌉ nodes.
pub fn check_balanced(coloring: &Coloring) -> Result<(), VerificationError> {
    let height = coloring.height();
    if height == 0 {
        return Ok(());
    }
    if height > MAX_HEIGHT {
        return Err(VerificationError::UnsupportedHeight { height });
    }

    let total = total_nodes(height);
    let floor = total / u64::from(height);
    let ceil = floor + u64::from(total % u64::from(height) != 0);

    for class in coloring.classes() {
        let size = class.len() as u64;
        if size != floor && size != ceil {
            return Err(VerificationError::Unbalanced {
                color: class.color(),
                size,
                floor,
                ceil,
            });
        }
    }
    Ok(())
}

/// No class contains a node together with one of its ancestors.
///
/// Each member walks its root path (repeated halving) and looks every
/// ancestor up in the sorted members of its own class. Memory stays
/// proportional to the class, whatever ids a loaded file holds.
pub fn check_ancestral(coloring: &Coloring) -> Result<(), VerificationError> {
    for class in coloring.classes() {
        let mut members: Vec<NodeId> = class.nodes().to_vec();
        members.sort_unstable();

        let conflict = members.iter().find_map(|&node| {
            node.ancestors()
                .take_while(|ancestor| !ancestor.is_root())
                .find(|ancestor| members.binary_search(ancestor).is_ok())
                .map(|ancestor| (ancestor, node))
        });

        if let Some((ancestor, descendant)) = conflict {
            return Err(VerificationError::AncestorPair {
                color: class.color(),
                ancestor: ancestor.get(),
                descendant: descendant.get(),
            });
        }
    }
    Ok(())
}
