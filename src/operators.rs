//! Crossover and mutation operators over allele vectors.
//!
//! Both operate on plain individuals with no knowledge of fitness:
//! crossover interleaves parent segments between random cut points, and
//! mutation rewrites a fixed fraction of alleles with fresh valid draws.
//! Population-level wrappers apply them row by row.

use rand::seq::index::sample;
use rand::Rng;

use crate::error::GaError;
use crate::population::{Individual, Population};
use crate::types::{AlignmentScorer, FragmentLibrary, Problem};

/// Multi-point crossover of two equal-length parents.
///
/// Chooses `num_points` distinct cut positions in `[0, len)`, force-includes
/// the boundaries `0` and `len`, and copies each resulting segment from a
/// uniformly chosen parent. The child always has the parents' length.
///
/// `num_points == 0` still yields the two forced boundaries, so the child
/// is wholly one randomly chosen parent. `num_points >= len` fails with
/// [`GaError::InvalidConfiguration`].
pub fn crossover<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    num_points: usize,
    rng: &mut R,
) -> Result<Individual, GaError> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(GaError::InvalidConfiguration(format!(
            "parents differ in length: {} vs {}",
            n,
            parent2.len()
        )));
    }
    if num_points >= n {
        return Err(GaError::InvalidConfiguration(format!(
            "num_points {num_points} must be less than individual length {n}"
        )));
    }

    let mut points: Vec<usize> = sample(rng, n, num_points).into_iter().collect();
    points.push(0);
    points.push(n);
    points.sort_unstable();
    points.dedup();

    let mut child = Vec::with_capacity(n);
    for pair in points.windows(2) {
        let provider = if rng.random_bool(0.5) { parent1 } else { parent2 };
        child.extend_from_slice(&provider[pair[0]..pair[1]]);
    }
    Ok(child)
}

/// One child per mating-pool slot.
///
/// Each child's parents are two distinct pool rows sampled uniformly;
/// parent pairs are drawn independently per child and may repeat across
/// children. The output has the pool's size and shape.
pub fn crossover_population<R: Rng + ?Sized>(
    matingpool: &Population,
    num_points: usize,
    rng: &mut R,
) -> Result<Population, GaError> {
    if matingpool.len() < 2 {
        return Err(GaError::InvalidConfiguration(format!(
            "mating pool of {} cannot supply two parents",
            matingpool.len()
        )));
    }

    let mut children = Vec::with_capacity(matingpool.len());
    for _ in 0..matingpool.len() {
        let parents = sample(rng, matingpool.len(), 2);
        let child = crossover(
            &matingpool[parents.index(0)],
            &matingpool[parents.index(1)],
            num_points,
            rng,
        )?;
        children.push(child);
    }
    Ok(children)
}

/// Mutates `individual` in place.
///
/// Replaces `floor(mutation_rate * len)` distinct alleles with uniform
/// draws from the **valid** range `0..count`, never the null sentinel —
/// the deliberate asymmetry with
/// [`random_allele`](crate::random_allele). Positions whose key
/// has no fragments are left unchanged (their only legal allele is the
/// sentinel `0`).
pub fn mutate<R, L, S>(
    problem: &Problem<'_, L, S>,
    individual: &mut Individual,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<(), GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(GaError::InvalidConfiguration(format!(
            "mutation_rate {mutation_rate} must be in [0, 1]"
        )));
    }
    let n = individual.len();
    if n != problem.width() {
        return Err(GaError::InvalidConfiguration(format!(
            "individual has {} alleles for {} keys",
            n,
            problem.width()
        )));
    }

    let mutation_number = (mutation_rate * n as f64).floor() as usize;
    for column in sample(rng, n, mutation_number) {
        let count = problem.count_at(column)?;
        if count > 0 {
            individual[column] = rng.random_range(0..count);
        }
    }
    Ok(())
}

/// Applies [`mutate`] to every row independently.
///
/// Returns a new population of identical shape; the input is never
/// modified, so a failed transition cannot corrupt the previous generation.
pub fn mutate_population<R, L, S>(
    problem: &Problem<'_, L, S>,
    population: &Population,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Population, GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    let mut mutated = population.clone();
    for individual in &mut mutated {
        mutate(problem, individual, mutation_rate, rng)?;
    }
    Ok(mutated)
}
