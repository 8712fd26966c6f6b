//! Genetic-algorithm search over fragment assignments for designed protein
//! topologies.
//!
//! Each structural position of a topology (a "key") offers a finite pool of
//! candidate fragments. A candidate solution assigns one integer allele per
//! key: values `0..n` pick a concrete fragment, and the sentinel `n` (the
//! pool size itself) means "no fragment at this position". The search
//! maximizes pairwise residue compatibility along topology edges while
//! paying a flat unit penalty per selected fragment, biasing runs toward
//! sparser, more confident assignments.
//!
//! The crate is the search core only. Three collaborators are injected:
//!
//! - [`FragmentLibrary`]: resolves `(key, index)` to a residue sequence
//! - [`AlignmentScorer`]: scores one residue pair
//! - [`Topology`]: the finished graph of keys, edges, and aligned offsets
//!
//! How those are built (geometry, substitution matrices, persistence) is a
//! caller concern, as is turning a final individual back into a sequence.
//!
//! # Key Types
//!
//! - [`Problem`]: the read-only inputs shared by every stage of a run
//! - [`GaConfig`]: algorithm parameters with builder-style setters
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: final population plus best-fitness statistics
//!
//! # Operator Functions
//!
//! The individual stages are plain functions over allele vectors and can be
//! composed without the runner: [`initial_population`], [`energy`],
//! [`selection`], [`crossover_population`], [`mutate_population`],
//! [`next_generation`].
//!
//! # Example
//!
//! ```ignore
//! let problem = Problem {
//!     keys: &keys,
//!     frags_count: &counts,
//!     library: &library,
//!     scorer: &blosum,
//!     topology: &topology,
//! };
//! let config = GaConfig::default().with_elite_size(10).with_seed(42);
//! let result = GaRunner::run(&problem, &config)?;
//! println!("best fitness: {}", result.best_fitness);
//! ```

mod config;
mod energy;
mod error;
pub mod operators;
mod population;
mod random;
mod runner;
mod selection;
mod topology;
mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::GaConfig;
pub use energy::{active_count, energy, evaluate_population};
pub use error::GaError;
pub use operators::{crossover, crossover_population, mutate, mutate_population};
pub use population::{
    create_individual, initial_population, is_active, random_allele, Individual, Population,
};
pub use random::create_rng;
pub use runner::{next_generation, GaResult, GaRunner};
pub use selection::selection;
pub use topology::{Edge, Topology};
pub use types::{AlignmentScorer, FragmentLibrary, Problem, Residue};
