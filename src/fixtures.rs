//! Shared test fixtures: an in-memory fragment library, simple scorers, and
//! a builder that wires a [`Problem`] together.

use std::collections::HashMap;

use crate::error::GaError;
use crate::topology::Topology;
use crate::types::{AlignmentScorer, FragmentLibrary, Problem, Residue};

/// Fragment library backed by a map of owned residue sequences.
pub(crate) struct TableLibrary {
    fragments: HashMap<String, Vec<Vec<Residue>>>,
}

impl FragmentLibrary for TableLibrary {
    fn count(&self, key: &str) -> usize {
        self.fragments.get(key).map_or(0, Vec::len)
    }

    fn select(&self, key: &str, index: usize) -> Result<&[Residue], GaError> {
        self.fragments
            .get(key)
            .and_then(|pool| pool.get(index))
            .map(Vec::as_slice)
            .ok_or_else(|| GaError::OutOfRange {
                key: key.to_string(),
                index,
                limit: self.count(key),
            })
    }
}

/// Scores every residue pair with the same constant.
pub(crate) struct ConstScorer(pub f64);

impl AlignmentScorer for ConstScorer {
    fn score(&self, _a: Residue, _b: Residue) -> f64 {
        self.0
    }
}

/// Identity-matrix scorer: `matched` for equal residues, `mismatched` otherwise.
pub(crate) struct MatchScorer {
    pub matched: f64,
    pub mismatched: f64,
}

impl AlignmentScorer for MatchScorer {
    fn score(&self, a: Residue, b: Residue) -> f64 {
        if a == b {
            self.matched
        } else {
            self.mismatched
        }
    }
}

/// Owns every input a [`Problem`] borrows.
pub(crate) struct Fixture {
    pub keys: Vec<String>,
    pub counts: HashMap<String, usize>,
    pub library: TableLibrary,
    pub scorer: ConstScorer,
    pub topology: Topology,
}

impl Fixture {
    /// Builds a fixture from `(key, fragment sequences)` pairs, in key order.
    ///
    /// Fragment counts are taken from the pool sizes; the default scorer is
    /// constant zero and the default topology has no edges.
    pub fn new(frags: &[(&str, &[&str])]) -> Self {
        let keys: Vec<String> = frags.iter().map(|(k, _)| (*k).to_string()).collect();
        let counts: HashMap<String, usize> = frags
            .iter()
            .map(|(k, pool)| ((*k).to_string(), pool.len()))
            .collect();
        let fragments: HashMap<String, Vec<Vec<Residue>>> = frags
            .iter()
            .map(|(k, pool)| {
                let pool: Vec<Vec<Residue>> =
                    pool.iter().map(|seq| seq.as_bytes().to_vec()).collect();
                ((*k).to_string(), pool)
            })
            .collect();
        Self {
            keys,
            counts,
            library: TableLibrary { fragments },
            scorer: ConstScorer(0.0),
            topology: Topology::new(),
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.scorer = ConstScorer(score);
        self
    }

    pub fn problem(&self) -> Problem<'_, TableLibrary, ConstScorer> {
        Problem {
            keys: &self.keys,
            frags_count: &self.counts,
            library: &self.library,
            scorer: &self.scorer,
            topology: &self.topology,
        }
    }

    /// Same problem but scored with `scorer` instead of the built-in one.
    pub fn problem_with<'a, S: AlignmentScorer>(
        &'a self,
        scorer: &'a S,
    ) -> Problem<'a, TableLibrary, S> {
        Problem {
            keys: &self.keys,
            frags_count: &self.counts,
            library: &self.library,
            scorer,
            topology: &self.topology,
        }
    }
}
