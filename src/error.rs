//! Error types for the GA core.

use thiserror::Error;

/// Errors surfaced by the GA core.
///
/// The core performs no retries and no silent recovery: out-of-contract
/// input fails fast, and a failed generation transition leaves the previous
/// population untouched. Numeric edge cases (all-null individuals,
/// zero-point crossover, edge-less topologies) are defined behaviors, not
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// A parameter is incompatible with the run: elite size vs population
    /// size, crossover points vs individual length, rates outside `[0, 1]`,
    /// or inputs that disagree on the key set.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An index exceeded what the fragment library provides for a key,
    /// either a fragment index past the pool size or an aligned offset past
    /// the fragment length.
    #[error("index {index} out of range for key `{key}` ({limit} available)")]
    OutOfRange {
        /// The position key whose pool or fragment was accessed.
        key: String,
        /// The offending index.
        index: usize,
        /// Number of valid entries.
        limit: usize,
    },

    /// The run has no position keys; there is nothing to search over.
    #[error("topology has no positions")]
    EmptyTopology,
}
