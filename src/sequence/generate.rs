//! Sequence generators
//!
//! - Balanced sequence (class sizes differ by at most one)
//! - Exhaustive enumeration of every feasible sequence for a height
//!
//! The enumeration grows very quickly (T(6) already has 268 399
//! feasible sequences); it is meant for manual selection and for
//! exhaustive validation at small heights, not for the coloring path.

use super::{is_feasible, ColorSequence};
use crate::tree::{total_nodes, MAX_HEIGHT};

/// Balanced color sequence for T(h)
///
/// With T = 2^(h+1) - 2 and u = T mod h, the first h - u colors get
/// ⌊T/h⌋ nodes and the remaining u colors get ⌈T/h⌉.
///
/// # Panics
///
/// Panics if `height` exceeds [`MAX_HEIGHT`].
pub fn balanced_sequence(height: u32) -> ColorSequence {
    assert!(height <= MAX_HEIGHT, "height {} exceeds {}", height, MAX_HEIGHT);
    if height == 0 {
        return ColorSequence::from_sizes(std::iter::empty());
    }

    let total = total_nodes(height);
    let h = u64::from(height);
    let floor = total / h;
    let remainder = total % h;

    ColorSequence::from_sizes(
        (0..h).map(|idx| if idx < h - remainder { floor } else { floor + 1 }),
    )
}

/// Visit every feasible sequence for `height` in lexicographic order.
///
/// Sizes are passed non-decreasing; the slice is reused between calls.
/// Heights beyond [`MAX_HEIGHT`] visit nothing.
pub fn for_each_feasible<F>(height: u32, mut visit: F)
where
    F: FnMut(&[u64]),
{
    if height > MAX_HEIGHT {
        return;
    }
    let mut enumerator = Enumerator {
        height,
        total: total_nodes(height),
        prefix: Vec::with_capacity(height as usize),
    };
    enumerator.descend(0, &mut visit);
}

/// Number of feasible sequences for `height`.
pub fn count_feasible(height: u32) -> u64 {
    let mut count = 0u64;
    for_each_feasible(height, |_| count += 1);
    count
}

/// Every feasible sequence for `height`, labelled by position.
pub fn enumerate_feasible(height: u32) -> Vec<ColorSequence> {
    let mut sequences = Vec::new();
    for_each_feasible(height, |sizes| {
        sequences.push(ColorSequence::from_sizes(sizes.iter().copied()));
    });
    sequences
}

struct Enumerator {
    height: u32,
    total: u64,
    prefix: Vec<u64>,
}

impl Enumerator {
    /// Given c[0..m], try every value of c[m] that keeps feasibility reachable.
    fn descend<F>(&mut self, m: u32, visit: &mut F)
    where
        F: FnMut(&[u64]),
    {
        if m == self.height {
            debug_assert!(
                is_feasible(self.height, &self.prefix),
                "enumerated an infeasible sequence {:?}",
                self.prefix
            );
            visit(&self.prefix);
            return;
        }

        let prefix_sum: u64 = self.prefix.iter().sum();
        let remaining = self.total - prefix_sum;

        // Largest c[m] that still leaves room for the h - m entries after it.
        let upper = remaining / u64::from(self.height - m);
        // Non-decreasing order, and C1 for prefix length m + 1.
        let lower = match self.prefix.last() {
            None => 2,
            Some(&previous) => previous.max(total_nodes(m + 1).saturating_sub(prefix_sum)),
        };

        for value in lower..=upper {
            self.prefix.push(value);
            self.descend(m + 1, visit);
            self.prefix.pop();
        }
    }
}
