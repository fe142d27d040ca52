//! Feasible color sequences
//!
//! A sequence of h sizes is h-feasible if, after sorting (c1 ≤ ... ≤ ch):
//!   (C1) c1 + ... + cm ≥ 2^(m+1) - 2 for every 1 ≤ m ≤ h
//!   (C2) c1 + ... + ch = 2^(h+1) - 2
//!
//! C1 says the m smallest colors can cover layers 1..m of T(h);
//! C2 says the colors cover exactly the non-root nodes.

use thiserror::Error;

use crate::tree::{total_nodes, MAX_HEIGHT};

/// Reason a sequence is not feasible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeasibilityError {
    /// Prefix coverage (C1) failed.
    #[error(
        "C1 violated: the {prefix} smallest colors hold {sum} nodes, \
         but layers 1..={prefix} contain {required}"
    )]
    PrefixCoverage {
        /// Prefix length m at which the check failed.
        prefix: u32,
        /// Sum of the m smallest sizes.
        sum: u64,
        /// Required minimum `2^(m+1) - 2`.
        required: u64,
    },

    /// Total (C2) failed.
    #[error("C2 violated: sizes total {total}, but T({height}) has {expected} non-root nodes")]
    TotalMismatch {
        /// Tree height.
        height: u32,
        /// Sum of all sizes.
        total: u64,
        /// Expected total `2^(h+1) - 2`.
        expected: u64,
    },

    /// The number of sizes does not match the height.
    #[error("expected {height} color sizes, got {actual}")]
    DimensionMismatch {
        /// Tree height.
        height: u32,
        /// Number of sizes supplied.
        actual: usize,
    },

    /// Height beyond what node ids can address.
    #[error("height {height} exceeds the supported maximum of {max}", max = MAX_HEIGHT)]
    UnsupportedHeight {
        /// Requested height.
        height: u32,
    },
}

impl FeasibilityError {
    /// Which paper condition failed, if any
    pub fn condition(&self) -> Option<&'static str> {
        match self {
            FeasibilityError::PrefixCoverage { .. } => Some("C1"),
            FeasibilityError::TotalMismatch { .. } => Some("C2"),
            _ => None,
        }
    }
}

/// Check whether `sizes` is an h-feasible sequence.
///
/// Sizes may come in any order. Prefixes are checked from m = h down to 1
/// and the first violation is reported.
pub fn check_feasible(height: u32, sizes: &[u64]) -> Result<(), FeasibilityError> {
    if height > MAX_HEIGHT {
        return Err(FeasibilityError::UnsupportedHeight { height });
    }
    if sizes.len() != height as usize {
        return Err(FeasibilityError::DimensionMismatch {
            height,
            actual: sizes.len(),
        });
    }

    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();

    let mut prefix_sums = Vec::with_capacity(sorted.len());
    let mut running = 0u64;
    for &size in &sorted {
        running = running.saturating_add(size);
        prefix_sums.push(running);
    }

    for m in (1..=height).rev() {
        let sum = prefix_sums[m as usize - 1];

        if m == height && sum != total_nodes(height) {
            return Err(FeasibilityError::TotalMismatch {
                height,
                total: sum,
                expected: total_nodes(height),
            });
        }

        let required = total_nodes(m);
        if sum < required {
            return Err(FeasibilityError::PrefixCoverage {
                prefix: m,
                sum,
                required,
            });
        }
    }

    Ok(())
}

/// Boolean form of [`check_feasible`].
pub fn is_feasible(height: u32, sizes: &[u64]) -> bool {
    check_feasible(height, sizes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2, &[3, 3] ; "balanced h2")]
    #[test_case(2, &[4, 2] ; "unsorted h2")]
    #[test_case(3, &[4, 5, 5] ; "balanced h3")]
    #[test_case(3, &[2, 4, 8] ; "skewed h3")]
    #[test_case(4, &[7, 7, 8, 8] ; "balanced h4")]
    #[test_case(1, &[2] ; "single layer")]
    fn feasible_sequences(height: u32, sizes: &[u64]) {
        assert_eq!(check_feasible(height, sizes), Ok(()));
    }

    #[test]
    fn test_total_violation_reports_c2() {
        let err = check_feasible(3, &[2, 4, 9]).unwrap_err();
        assert_eq!(
            err,
            FeasibilityError::TotalMismatch {
                height: 3,
                total: 15,
                expected: 14
            }
        );
        assert_eq!(err.condition(), Some("C2"));
    }

    #[test]
    fn test_prefix_violation_reports_c1() {
        // Two colors of size 2 cannot cover the 6 nodes of layers 1-2.
        let err = check_feasible(3, &[2, 2, 10]).unwrap_err();
        assert_eq!(
            err,
            FeasibilityError::PrefixCoverage {
                prefix: 2,
                sum: 4,
                required: 6
            }
        );
        assert_eq!(err.condition(), Some("C1"));

        let err = check_feasible(2, &[1, 5]).unwrap_err();
        assert_eq!(err.condition(), Some("C1"));
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            check_feasible(3, &[3, 3]),
            Err(FeasibilityError::DimensionMismatch {
                height: 3,
                actual: 2
            })
        );
        assert!(!is_feasible(63, &[]));
    }

    #[test]
    fn test_empty_tree_is_trivially_feasible() {
        assert!(is_feasible(0, &[]));
    }
}
