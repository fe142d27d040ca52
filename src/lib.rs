//! # Ancestral Colorings of Perfect Binary Trees
//!
//! This library implements the Color-Splitting Algorithm (CSA), which
//! colors the non-root nodes of a perfect binary tree T(h) so that no
//! color class contains a node together with one of its ancestors (the
//! Ancestral Property). Colorings with prescribed class sizes give
//! combinatorial batch codes for spreading Merkle-proof fragments over
//! storage servers, including servers with unequal capacities.
//!
//! ## Core Algorithm
//!
//! 1. **Feasible sequences**: class sizes c1 ≤ ... ≤ ch must satisfy the
//!    prefix-coverage (C1) and total (C2) conditions
//! 2. **Color the children**: the two children of the current root get
//!    color 1 (if c1 = 2) or colors 1 and 2
//! 3. **Feasible split**: the remaining budget is split into two
//!    (h-1)-feasible sequences, one per child subtree
//! 4. **Recurse** down both subtrees
//!
//! Result: every node is visited once; the split keeps every recursive
//! call feasible, so the fill never runs out of colors.
//!
//! ## Usage Example
//!
//! ```
//! use ancestral_coloring::{AncestralColorer, ColoringConfig};
//!
//! let config = ColoringConfig::balanced(2).with_verification(true);
//! let run = AncestralColorer::new(config).run()?;
//! assert_eq!(run.coloring.classes()[0].to_string(), "2 6 7");
//! assert!(run.report.unwrap().passed());
//! # Ok::<(), ancestral_coloring::ColoringError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod export;   // Flat text dump of colorings
pub mod sequence; // Color sequences, feasibility, generators
pub mod splitter; // Color-Splitting Algorithm
pub mod tree;     // Implicit perfect binary tree
pub mod verify;   // Post-hoc structural checks

// Re-exports for convenience
pub use sequence::{
    balanced_sequence, enumerate_feasible, ColorEntry, ColorId, ColorSequence, FeasibilityError,
    SequenceError,
};
pub use splitter::{color_splitting, split, ColorClass, Coloring, MIN_HEIGHT};
pub use tree::{NodeId, MAX_HEIGHT};
pub use verify::{VerificationError, VerificationReport};

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur before or while coloring
#[derive(Error, Debug)]
pub enum ColoringError {
    /// Height outside the supported range
    #[error("height must be between {min} and {max}, got {0}", min = MIN_HEIGHT, max = MAX_HEIGHT)]
    InvalidHeight(u32),

    /// Number of sizes does not match the configured height
    #[error("expected {height} color sizes, got {actual}")]
    LengthMismatch {
        /// Configured height
        height: u32,
        /// Number of sizes supplied
        actual: usize,
    },

    /// Sequence violates C1 or C2
    #[error("infeasible color sequence: {0}")]
    Infeasible(#[from] FeasibilityError),

    /// Sequence could not be built
    #[error("malformed color sequence: {0}")]
    Sequence(#[from] SequenceError),

    /// A produced coloring failed a structural check
    #[error("coloring failed verification: {0}")]
    Verification(#[from] VerificationError),

    /// A class buffer could not be reserved
    #[error("cannot reserve {nodes} nodes for color {color}: {source}")]
    Allocation {
        /// Color whose buffer failed
        color: ColorId,
        /// Declared class size
        nodes: u64,
        /// Allocator failure
        #[source]
        source: std::collections::TryReserveError,
    },
}

/// Where the color sequence comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    /// Maximally balanced sequence for the height
    Balanced,
    /// Bare sizes in any order, labelled by position
    Sizes(Vec<u64>),
    /// A prepared sequence
    Sequence(ColorSequence),
}

/// Configuration parameters for one coloring run
#[derive(Debug, Clone)]
pub struct ColoringConfig {
    /// Tree height h
    pub height: u32,

    /// Source of the color sequence
    pub source: SequenceSource,

    /// Run the verifier on the result
    pub verify: bool,
}

impl ColoringConfig {
    /// Balanced coloring of T(h)
    pub fn balanced(height: u32) -> Self {
        Self {
            height,
            source: SequenceSource::Balanced,
            verify: false,
        }
    }

    /// Coloring for manually chosen sizes; the height is their count
    pub fn manual(sizes: Vec<u64>) -> Self {
        Self {
            height: sizes.len() as u32,
            source: SequenceSource::Sizes(sizes),
            verify: false,
        }
    }

    /// Coloring for a prepared sequence
    pub fn from_sequence(sequence: ColorSequence) -> Self {
        Self {
            height: sequence.height(),
            source: SequenceSource::Sequence(sequence),
            verify: false,
        }
    }

    /// Enable verification of the result.
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    /// Whether the balance check applies
    pub fn is_balanced(&self) -> bool {
        self.source == SequenceSource::Balanced
    }

    /// Build the color sequence and validate it at the boundary.
    pub fn resolve_sequence(&self) -> Result<ColorSequence, ColoringError> {
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(ColoringError::InvalidHeight(self.height));
        }

        let sequence = match &self.source {
            SequenceSource::Balanced => balanced_sequence(self.height),
            SequenceSource::Sizes(sizes) => ColorSequence::from_sizes(sizes.iter().copied()),
            SequenceSource::Sequence(sequence) => sequence.clone(),
        };

        if sequence.len() != self.height as usize {
            return Err(ColoringError::LengthMismatch {
                height: self.height,
                actual: sequence.len(),
            });
        }
        sequence.check_feasible()?;
        Ok(sequence)
    }
}

/// Result of one coloring run
#[derive(Debug, Clone)]
pub struct ColoringRun {
    /// Sequence that was colored (sorted)
    pub sequence: ColorSequence,

    /// The coloring
    pub coloring: Coloring,

    /// Time spent in the splitting pass
    pub elapsed: Duration,

    /// Verification outcome (if enabled)
    pub report: Option<VerificationReport>,
}

/// Main coloring orchestrator
///
/// Resolves the sequence, runs the splitting pass and optionally verifies.
#[derive(Debug)]
pub struct AncestralColorer {
    config: ColoringConfig,
}

impl AncestralColorer {
    /// Create a new colorer
    pub fn new(config: ColoringConfig) -> Self {
        Self { config }
    }

    /// Run the coloring
    ///
    /// Invalid heights and infeasible sequences are rejected before any
    /// node is colored.
    pub fn run(&self) -> Result<ColoringRun, ColoringError> {
        let sequence = self.config.resolve_sequence()?;
        info!(height = sequence.height(), %sequence, "coloring");

        let start = Instant::now();
        let coloring = color_splitting(&sequence)?;
        let elapsed = start.elapsed();

        let report = self
            .config
            .verify
            .then(|| verify::verify(&coloring, self.config.is_balanced()));
        if let Some(failure) = report.as_ref().and_then(VerificationReport::first_failure) {
            warn!(%failure, "coloring failed verification");
        }

        Ok(ColoringRun {
            sequence,
            coloring,
            elapsed,
            report,
        })
    }
}

/// Outcome of coloring every feasible sequence of one height
#[derive(Debug)]
pub struct ExhaustiveReport {
    /// Tree height
    pub height: u32,

    /// Number of sequences colored
    pub checked: u64,

    /// Sequences whose coloring was rejected or failed a check
    pub failures: Vec<(ColorSequence, ColoringError)>,
}

impl ExhaustiveReport {
    /// Whether every sequence produced a valid coloring
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Color and verify every feasible sequence of `height`.
///
/// Checks coverage, declared sizes and the Ancestral Property (not
/// balance). The number of sequences explodes with the height; heights
/// above 6 are impractical.
pub fn exhaustive_check(height: u32) -> Result<ExhaustiveReport, ColoringError> {
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        return Err(ColoringError::InvalidHeight(height));
    }

    let mut checked = 0u64;
    let mut failures = Vec::new();
    sequence::for_each_feasible(height, |sizes| {
        checked += 1;
        let sequence = ColorSequence::from_sizes(sizes.iter().copied());
        let outcome = color_splitting(&sequence).and_then(|coloring| {
            verify::verify(&coloring, false)
                .into_result()
                .map_err(ColoringError::from)
        });
        match outcome {
            Ok(()) => debug!(%sequence, "passed"),
            Err(err) => {
                warn!(%sequence, %err, "failed");
                failures.push((sequence, err));
            }
        }
    });

    info!(height, checked, failed = failures.len(), "exhaustive check finished");
    Ok(ExhaustiveReport {
        height,
        checked,
        failures,
    })
}
