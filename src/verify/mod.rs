//! Coloring verifier
//!
//! Post-hoc checks over the output data model only; nothing here knows
//! how the coloring was produced. Used by tests, the exhaustive
//! self-check and the `check` command.

mod checks;

pub use checks::{check_ancestral, check_balanced, check_declared_sizes, check_node_ids};
pub use crate::tree::is_descendant_of;

use std::fmt;

use thiserror::Error;

use crate::sequence::ColorId;
use crate::splitter::Coloring;
use crate::tree::MAX_HEIGHT;

/// A failed structural check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// Wrong number of color classes.
    #[error("expected {expected} color classes, found {actual}")]
    ClassCount {
        /// Tree height.
        expected: u32,
        /// Classes present.
        actual: usize,
    },

    /// A node id outside the non-root range.
    #[error("color {color}: node {node} is out of range [2, {max}]")]
    OutOfRange {
        /// Class holding the node.
        color: ColorId,
        /// Offending id.
        node: u64,
        /// Largest valid id.
        max: u64,
    },

    /// A node assigned to more than one place.
    #[error("node {node} is assigned more than once")]
    Duplicate {
        /// Offending id.
        node: u64,
    },

    /// Total number of assigned nodes is wrong.
    #[error("{assigned} nodes assigned, tree has {expected} non-root nodes")]
    TotalMismatch {
        /// Nodes found.
        assigned: u64,
        /// Non-root nodes in T(h).
        expected: u64,
    },

    /// A class does not hold its declared size.
    #[error("color {color} declared {declared} nodes but holds {actual}")]
    DeclaredSize {
        /// Class label.
        color: ColorId,
        /// Declared size.
        declared: u64,
        /// Occupied count.
        actual: usize,
    },

    /// A class size outside {⌊T/h⌋, ⌈T/h⌉}.
    #[error("color {color} has {size} nodes, balanced sizes are {floor} or {ceil}")]
    Unbalanced {
        /// Class label.
        color: ColorId,
        /// Occupied count.
        size: u64,
        /// ⌊T/h⌋
        floor: u64,
        /// ⌈T/h⌉
        ceil: u64,
    },

    /// A class holds an ancestor together with its descendant.
    #[error("color {color} contains node {ancestor} and its descendant {descendant}")]
    AncestorPair {
        /// Class label.
        color: ColorId,
        /// The ancestor.
        ancestor: u64,
        /// The descendant.
        descendant: u64,
    },

    /// Height beyond what node ids can address.
    #[error("height {height} exceeds the supported maximum of {max}", max = MAX_HEIGHT)]
    UnsupportedHeight {
        /// Height recorded in the coloring.
        height: u32,
    },
}

/// Outcome of one named check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Check name
    pub name: &'static str,
    /// `Ok` if the check passed
    pub result: Result<(), VerificationError>,
}

impl CheckOutcome {
    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Results of all checks run over one coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    outcomes: Vec<CheckOutcome>,
}

impl VerificationReport {
    /// All outcomes, in the order the checks ran
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Whether every check passed
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// First failing check, if any
    pub fn first_failure(&self) -> Option<&VerificationError> {
        self.outcomes
            .iter()
            .find_map(|outcome| outcome.result.as_ref().err())
    }

    /// Convert into a result carrying the first failure
    pub fn into_result(self) -> Result<(), VerificationError> {
        self.outcomes
            .into_iter()
            .find_map(|outcome| outcome.result.err())
            .map_or(Ok(()), Err)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "{}: PASSED", outcome.name)?,
                Err(err) => writeln!(f, "{}: FAILED ({})", outcome.name, err)?,
            }
        }
        Ok(())
    }
}

/// Run every check; the balance check only when `balanced` is set.
pub fn verify(coloring: &Coloring, balanced: bool) -> VerificationReport {
    let mut outcomes = vec![
        CheckOutcome {
            name: "node-ids",
            result: check_node_ids(coloring),
        },
        CheckOutcome {
            name: "declared-sizes",
            result: check_declared_sizes(coloring),
        },
    ];
    if balanced {
        outcomes.push(CheckOutcome {
            name: "balance",
            result: check_balanced(coloring),
        });
    }
    outcomes.push(CheckOutcome {
        name: "ancestral",
        result: check_ancestral(coloring),
    });

    VerificationReport { outcomes }
}
