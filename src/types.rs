//! Contracts between the GA core and its external collaborators.
//!
//! The core never builds fragment pools or scoring matrices itself; it
//! consumes them through [`FragmentLibrary`] and [`AlignmentScorer`], and
//! reads the finished [`Topology`](crate::Topology). [`Problem`] bundles all
//! of these with the run's key order and fragment-count table.

use std::collections::HashMap;

use crate::error::GaError;
use crate::topology::Topology;

/// A single residue, as a one-letter amino-acid code.
pub type Residue = u8;

/// Provides the fragment pool behind each position key.
///
/// `Send + Sync` because the fitness pass may run on rayon workers.
pub trait FragmentLibrary: Send + Sync {
    /// Number of fragments available at `key`.
    fn count(&self, key: &str) -> usize;

    /// The residue sequence of fragment `index` at `key`.
    ///
    /// Fails with [`GaError::OutOfRange`] when `index >= count(key)`.
    fn select(&self, key: &str, index: usize) -> Result<&[Residue], GaError>;
}

/// Pairwise residue compatibility scorer.
///
/// Must be deterministic for fixed substitution and gap parameters; the
/// core treats it as an opaque function.
pub trait AlignmentScorer: Send + Sync {
    /// Compatibility score for one residue pair.
    fn score(&self, a: Residue, b: Residue) -> f64;
}

/// Read-only inputs shared by every stage of one run.
///
/// `keys` fixes the column order of every individual; it must not change
/// across the run. `frags_count` maps each key to the number of real
/// fragment choices there, which also defines that column's null sentinel
/// (allele == count).
pub struct Problem<'a, L: FragmentLibrary + ?Sized, S: AlignmentScorer + ?Sized> {
    /// Ordered position keys; defines individual column order.
    pub keys: &'a [String],
    /// Fragment-count table, keyed by position key.
    pub frags_count: &'a HashMap<String, usize>,
    /// Fragment pool access.
    pub library: &'a L,
    /// Pairwise residue scorer.
    pub scorer: &'a S,
    /// Finished topology graph; read-only.
    pub topology: &'a Topology,
}

impl<L: FragmentLibrary + ?Sized, S: AlignmentScorer + ?Sized> Problem<'_, L, S> {
    /// Number of positions, i.e. the column count of every individual.
    pub fn width(&self) -> usize {
        self.keys.len()
    }

    /// Fragment count for the key at `column`.
    ///
    /// A key missing from the count table is out-of-contract input.
    pub fn count_at(&self, column: usize) -> Result<usize, GaError> {
        let key = &self.keys[column];
        self.frags_count.get(key).copied().ok_or_else(|| {
            GaError::InvalidConfiguration(format!("no fragment count for key `{key}`"))
        })
    }
}
