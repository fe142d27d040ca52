//! Color classes: the output buffers of the coloring pass
//!
//! One buffer per color, pre-sized to the color's declared size so the
//! fill pass never reallocates. The recursion addresses buffers by
//! color id through a slot table sorted by color, one slot per class.

use std::collections::TryReserveError;
use std::fmt;

use crate::sequence::{ColorId, ColorSequence};
use crate::tree::NodeId;
use crate::ColoringError;

/// Nodes sharing one color, with a capacity fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorClass {
    color: ColorId,
    declared: u64,
    nodes: Vec<NodeId>,
}

impl ColorClass {
    /// Empty class that will hold exactly `declared` nodes.
    ///
    /// Fails instead of aborting when the buffer cannot be reserved.
    pub fn try_with_capacity(color: ColorId, declared: u64) -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(usize::try_from(declared).unwrap_or(usize::MAX))?;
        Ok(Self {
            color,
            declared,
            nodes,
        })
    }

    /// Class whose declared size is whatever it already holds.
    pub fn from_nodes(color: ColorId, nodes: Vec<NodeId>) -> Self {
        Self {
            color,
            declared: nodes.len() as u64,
            nodes,
        }
    }

    /// Color label
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Size declared by the color sequence
    pub fn declared(&self) -> u64 {
        self.declared
    }

    /// Occupied count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the occupied count reached the declared size
    pub fn is_full(&self) -> bool {
        self.nodes.len() as u64 == self.declared
    }

    /// Nodes in assignment order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn push(&mut self, node: NodeId) {
        debug_assert!(
            !self.is_full(),
            "color {} already holds its {} declared nodes",
            self.color,
            self.declared
        );
        self.nodes.push(node);
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Ancestral coloring of T(h): one class per color, in sequence order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coloring {
    height: u32,
    classes: Vec<ColorClass>,
    /// (color, class position), sorted by color
    #[cfg_attr(feature = "serde", serde(skip))]
    slots: Vec<(ColorId, usize)>,
}

impl Coloring {
    /// Empty buffers for every entry of `sequence`.
    ///
    /// Each buffer is reserved up front; a size the allocator cannot
    /// satisfy is reported as [`ColoringError::Allocation`].
    pub fn for_sequence(sequence: &ColorSequence) -> Result<Self, ColoringError> {
        let classes = sequence
            .entries()
            .iter()
            .map(|entry| {
                ColorClass::try_with_capacity(entry.color, entry.size).map_err(|source| {
                    ColoringError::Allocation {
                        color: entry.color,
                        nodes: entry.size,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_classes(sequence.height(), classes))
    }

    /// Wrap existing classes (e.g. loaded from an export).
    ///
    /// Color labels must be unique.
    pub fn from_classes(height: u32, classes: Vec<ColorClass>) -> Self {
        let mut slots: Vec<(ColorId, usize)> = classes
            .iter()
            .enumerate()
            .map(|(position, class)| (class.color, position))
            .collect();
        slots.sort_unstable();
        debug_assert!(
            slots.windows(2).all(|pair| pair[0].0 != pair[1].0),
            "duplicate color"
        );
        Self {
            height,
            classes,
            slots,
        }
    }

    fn slot(&self, color: ColorId) -> Option<usize> {
        self.slots
            .binary_search_by_key(&color, |&(slot_color, _)| slot_color)
            .ok()
            .map(|idx| self.slots[idx].1)
    }

    /// Tree height h
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Classes in sequence order
    pub fn classes(&self) -> &[ColorClass] {
        &self.classes
    }

    /// Look up a class by color
    pub fn class(&self, color: ColorId) -> Option<&ColorClass> {
        self.slot(color).map(|slot| &self.classes[slot])
    }

    /// Total number of assigned nodes
    pub fn assigned(&self) -> u64 {
        self.classes.iter().map(|class| class.len() as u64).sum()
    }

    /// Whether every class holds exactly its declared size
    pub fn is_complete(&self) -> bool {
        self.classes.iter().all(ColorClass::is_full)
    }

    /// Deterministic blake3 digest over height, labels and node order
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.height.to_le_bytes());
        for class in &self.classes {
            hasher.update(&(class.color.index() as u64).to_le_bytes());
            hasher.update(&(class.len() as u64).to_le_bytes());
            for node in &class.nodes {
                hasher.update(&node.get().to_le_bytes());
            }
        }
        hasher.finalize()
    }

    /// Append `node` to the class of `color`.
    ///
    /// The recursion only hands out colors taken from the sequence the
    /// buffers were built for.
    pub(crate) fn assign(&mut self, color: ColorId, node: NodeId) {
        let slot = self.slot(color);
        debug_assert!(slot.is_some(), "color {} has no class buffer", color);
        if let Some(slot) = slot {
            self.classes[slot].push(node);
        }
    }
}
