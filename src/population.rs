//! Individual encoding and initial population construction.
//!
//! An individual is a plain allele vector, one entry per position key in key
//! order; a population is a rectangular table of them. Later stages must
//! preserve that shape: every row as long as the key list, every entry
//! within its column's allele bound.

use rand::Rng;

use crate::error::GaError;
use crate::types::{AlignmentScorer, FragmentLibrary, Problem};

/// One candidate assignment: one allele per position key, in key order.
///
/// An allele `v` for a key with `n` fragments satisfies `0 <= v <= n`;
/// `v == n` is the null sentinel ("no fragment here"). Every downstream
/// stage treats the sentinel as "inactive", never as a fragment index.
pub type Individual = Vec<usize>;

/// One generation: rows are individuals, columns are keys.
pub type Population = Vec<Individual>;

/// Whether `allele` selects a concrete fragment from a pool of `count`.
#[inline]
pub fn is_active(allele: usize, count: usize) -> bool {
    allele < count
}

/// Draws one initial allele for a key with `count` fragments.
///
/// Policy: `round(u * count)` for `u ~ U(0, 1)`. Interior values receive a
/// full unit window while `0` and the null sentinel `count` each receive a
/// half window. Initialization is thus the only stage that can introduce
/// the null allele; [`mutate`](crate::mutate) draws from the valid range
/// only. That asymmetry is intentional and relied upon by callers.
pub fn random_allele<R: Rng + ?Sized>(count: usize, rng: &mut R) -> usize {
    (rng.random_range(0.0..1.0f64) * count as f64).round() as usize
}

/// Creates one random individual for `problem`.
pub fn create_individual<R, L, S>(
    problem: &Problem<'_, L, S>,
    rng: &mut R,
) -> Result<Individual, GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    (0..problem.width())
        .map(|column| Ok(random_allele(problem.count_at(column)?, rng)))
        .collect()
}

/// Builds the initial population: `pop_size` rows of independently drawn
/// alleles.
///
/// Fails with [`GaError::EmptyTopology`] when the problem has no keys.
pub fn initial_population<R, L, S>(
    problem: &Problem<'_, L, S>,
    pop_size: usize,
    rng: &mut R,
) -> Result<Population, GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    if problem.width() == 0 {
        return Err(GaError::EmptyTopology);
    }
    (0..pop_size)
        .map(|_| create_individual(problem, rng))
        .collect()
}
