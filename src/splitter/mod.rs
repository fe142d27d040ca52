//! Color-Splitting Algorithm (CSA)
//!
//! Colors the two children of a subtree root, splits the color sequence
//! into feasible sequences for the two child subtrees, and recurses.
//! Each internal node is visited once; recursion depth equals h.

mod classes;
mod split;

pub use classes::{ColorClass, Coloring};
pub use split::split;

use std::time::Instant;

use tracing::{debug, warn};

use crate::sequence::ColorSequence;
use crate::tree::{NodeId, MAX_HEIGHT};
use crate::ColoringError;

/// Smallest height the splitting engine accepts.
pub const MIN_HEIGHT: u32 = 2;

/// Find a c-coloring of T(h) for the color sequence c (h = |c|).
///
/// Rejects out-of-range heights and infeasible sequences before any
/// node is colored.
pub fn color_splitting(sequence: &ColorSequence) -> Result<Coloring, ColoringError> {
    let height = sequence.height();
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        return Err(ColoringError::InvalidHeight(height));
    }
    if let Err(err) = sequence.check_feasible() {
        warn!(%sequence, %err, "rejecting color sequence");
        return Err(err.into());
    }

    let start = Instant::now();
    let mut coloring = Coloring::for_sequence(sequence).map_err(|err| {
        warn!(%sequence, %err, "cannot allocate class buffers");
        err
    })?;
    color_subtree(NodeId::ROOT, sequence, &mut coloring);
    debug_assert!(coloring.is_complete());

    debug!(
        height,
        nodes = coloring.assigned(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "color splitting finished"
    );
    Ok(coloring)
}

/// Color every non-root node below `root` with the h-feasible `sequence`.
///
/// `root` itself is either the tree root or already colored by the
/// caller. Nodes are appended to `coloring` in pre-order: both children
/// first, then the whole left subtree, then the whole right subtree.
pub fn color_subtree(root: NodeId, sequence: &ColorSequence, coloring: &mut Coloring) {
    let c = sequence.entries();
    if c.is_empty() {
        return;
    }
    debug_assert!(sequence.is_feasible(), "infeasible sequence {}", sequence);

    let (left, right) = root.children();
    if c[0].size == 2 {
        // Color 1 covers both children and is used up.
        coloring.assign(c[0].color, left);
        coloring.assign(c[0].color, right);
    } else {
        coloring.assign(c[0].color, left);
        coloring.assign(c[1].color, right);
    }

    if c.len() > 1 {
        let (a, b) = split(sequence);
        color_subtree(left, &a, coloring);
        color_subtree(right, &b, coloring);
    }
}
