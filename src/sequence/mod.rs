//! Color sequences and the feasibility predicate
//!
//! A color sequence c = [c1, ..., ch] says how many nodes of T(h) each of
//! the h colors will receive. Sequences are kept sorted non-decreasing by
//! size; the sort is stable so equal sizes keep their input order.

mod feasibility;
pub mod generate;

pub use feasibility::{check_feasible, is_feasible, FeasibilityError};
pub use generate::{balanced_sequence, count_feasible, enumerate_feasible, for_each_feasible};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Traditional labels for the first 36 colors.
const LABELS: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors raised while building a color sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// No sizes were supplied.
    #[error("empty color sequence")]
    Empty,

    /// A token in a manual sequence was not a non-negative integer.
    #[error("invalid size '{token}' at position {position}: expected a non-negative integer")]
    InvalidSize {
        /// 1-based position of the token.
        position: usize,
        /// Offending token.
        token: String,
    },

    /// The same color label was used twice.
    #[error("color {0} appears more than once")]
    DuplicateColor(ColorId),
}

/// Color identifier (unbounded index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorId(u32);

impl ColorId {
    /// Create a color from its index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index of this color
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LABELS.get(self.index()) {
            Some(&label) => write!(f, "{}", label as char),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// One (label, size) pair of a color sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    /// Color label
    pub color: ColorId,
    /// Number of nodes this color receives
    pub size: u64,
}

impl ColorEntry {
    /// Construct a new entry.
    pub fn new(color: ColorId, size: u64) -> Self {
        Self { color, size }
    }
}

/// Color sequence sorted non-decreasing by size
///
/// Its length is the height of the (sub)tree it colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSequence {
    entries: Vec<ColorEntry>,
}

impl ColorSequence {
    /// Build a sequence from labelled entries, sorting by size.
    ///
    /// Labels must be unique.
    pub fn new(entries: Vec<ColorEntry>) -> Result<Self, SequenceError> {
        let mut labels: Vec<ColorId> = entries.iter().map(|entry| entry.color).collect();
        labels.sort_unstable();
        if let Some(pair) = labels.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SequenceError::DuplicateColor(pair[0]));
        }
        Ok(Self::from_entries(entries))
    }

    /// Build a sequence from bare sizes; labels follow input position.
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let entries = sizes
            .into_iter()
            .enumerate()
            .map(|(idx, size)| ColorEntry::new(ColorId::new(idx as u32), size))
            .collect();
        Self::from_entries(entries)
    }

    /// Sort without label validation (labels are unique by construction).
    pub(crate) fn from_entries(mut entries: Vec<ColorEntry>) -> Self {
        entries.sort_by_key(|entry| entry.size);
        Self { entries }
    }

    /// Height h of the tree this sequence colors (= number of colors)
    pub fn height(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no colors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in non-decreasing size order
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Sizes in non-decreasing order
    pub fn sizes(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.size).collect()
    }

    /// Sum of all sizes
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.size))
    }

    /// Check C1/C2 against the sequence's own height
    pub fn check_feasible(&self) -> Result<(), FeasibilityError> {
        check_feasible(self.height(), &self.sizes())
    }

    /// Whether the sequence is h-feasible for h = its length
    pub fn is_feasible(&self) -> bool {
        self.check_feasible().is_ok()
    }
}

impl fmt::Display for ColorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry.size)?;
        }
        write!(f, "]")
    }
}

/// Parse a manual entry: whitespace-separated sizes in any order.
impl FromStr for ColorSequence {
    type Err = SequenceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let sizes = input
            .split_whitespace()
            .enumerate()
            .map(|(idx, token)| {
                token.parse::<u64>().map_err(|_| SequenceError::InvalidSize {
                    position: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sizes.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self::from_sizes(sizes))
    }
}
