//! Feasible split: one h-feasible sequence → two (h-1)-feasible ones
//!
//! After the two children of a subtree root are colored, the remaining
//! budget of every color is divided between the left subtree (a) and the
//! right subtree (b). Positions are visited in size order while the
//! running totals Sa and Sb are kept as close as possible:
//!   Sa < Sb  → a takes ⌈c_i/2⌉, b takes ⌊c_i/2⌋
//!   Sa ≥ Sb  → a takes ⌊c_i/2⌋, b takes ⌈c_i/2⌉
//!
//! The first positions are special because the children consumed part
//! of c1 (and c2) before the split begins:
//!   c1 = 2  → both children used color 1; a and b share c2 by halves
//!   c1 > 2  → a starts with c2 - 1, b with c1 - 1, and the leftover
//!             c3 + c1 - c2 is halved into position 3 (a gets the ceiling)
//!
//! Color 1 never reaches a when it was used on the left child, and color
//! 2 never reaches b when it was used on the right child, which is what
//! keeps the coloring ancestral.

use tracing::trace;

use crate::sequence::{ColorEntry, ColorSequence};

/// (⌊s/2⌋, ⌈s/2⌉)
#[inline]
fn halves(size: u64) -> (u64, u64) {
    (size / 2, size - size / 2)
}

/// Split an h-feasible sequence (h ≥ 2) into the sequences for the left
/// and right subtrees of height h - 1.
///
/// Both results are sorted by size; together they hold
/// `2 * (2^h - 2)` nodes.
///
/// # Panics
///
/// Panics if the sequence has fewer than two colors.
pub fn split(sequence: &ColorSequence) -> (ColorSequence, ColorSequence) {
    let c = sequence.entries();
    let h = c.len();
    assert!(h >= 2, "split needs at least two colors, got {}", h);
    debug_assert!(c[0].size >= 2, "feasible sequences start at 2");

    let mut a = Vec::with_capacity(h - 1);
    let mut b = Vec::with_capacity(h - 1);

    let next = if c[0].size == 2 {
        let (floor, ceil) = halves(c[1].size);
        a.push(ColorEntry::new(c[1].color, floor));
        b.push(ColorEntry::new(c[1].color, ceil));
        2
    } else {
        a.push(ColorEntry::new(c[1].color, c[1].size - 1));
        b.push(ColorEntry::new(c[0].color, c[0].size - 1));

        if h > 2 {
            let folded = c[2].size + c[0].size - c[1].size;
            let to_a = folded - folded / 2;
            let to_b = c[1].size - c[0].size + folded / 2;
            debug_assert_eq!(to_a + to_b, c[2].size);
            a.push(ColorEntry::new(c[2].color, to_a));
            b.push(ColorEntry::new(c[2].color, to_b));
            3
        } else {
            2
        }
    };

    let mut sum_a: u64 = a.iter().map(|entry| entry.size).sum();
    let mut sum_b: u64 = b.iter().map(|entry| entry.size).sum();

    for entry in &c[next..] {
        let (floor, ceil) = halves(entry.size);
        let (to_a, to_b) = if sum_a < sum_b {
            (ceil, floor)
        } else {
            (floor, ceil)
        };
        a.push(ColorEntry::new(entry.color, to_a));
        b.push(ColorEntry::new(entry.color, to_b));
        sum_a += to_a;
        sum_b += to_b;
    }

    let left = ColorSequence::from_entries(a);
    let right = ColorSequence::from_entries(b);
    trace!(height = h, %sequence, %left, %right, "split");
    (left, right)
}
