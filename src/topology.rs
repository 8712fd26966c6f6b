//! Topology graph consumed by the fitness evaluator.
//!
//! The graph is derived elsewhere from protein geometry; the core only
//! iterates its edges. Each edge records which residue offsets within the
//! two endpoint fragments describe the same structural position and must be
//! scored against each other when both endpoints have a fragment selected.

/// One edge between two position keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint key.
    pub u: String,
    /// Second endpoint key.
    pub v: String,
    /// Aligned offset pairs `(offset_in_u, offset_in_v)` to compare.
    ///
    /// May be empty; such an edge contributes nothing to the score.
    pub same_aa: Vec<(usize, usize)>,
}

/// Position keys connected by alignment edges.
///
/// Edge order carries no meaning; the fitness sum is order-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    edges: Vec<Edge>,
}

impl Topology {
    /// Creates an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge between `u` and `v` with its aligned offset pairs.
    pub fn add_edge(
        &mut self,
        u: impl Into<String>,
        v: impl Into<String>,
        same_aa: Vec<(usize, usize)>,
    ) {
        self.edges.push(Edge {
            u: u.into(),
            v: v.into(),
            same_aa,
        });
    }

    /// Read-only edge iteration.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether the topology has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
