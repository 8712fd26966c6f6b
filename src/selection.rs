//! Elite-plus-random mating pool construction.

use rand::Rng;

use crate::energy::evaluate_population;
use crate::error::GaError;
use crate::population::Population;
use crate::types::{AlignmentScorer, FragmentLibrary, Problem};

/// Ranks `population` by fitness and assembles the mating pool.
///
/// The pool is the `elite_size` fittest individuals (stable descending
/// sort, ties keep input order) followed by `elite_size` rows sampled
/// uniformly **with replacement** from the whole input population. The
/// random half is not restricted to non-elites, so elites may appear twice.
/// Pool size is always `2 * elite_size`, and every current elite is carried
/// unmodified.
///
/// With `parallel`, the fitness pass runs on rayon workers; the ranking is
/// unaffected because evaluation draws no randomness.
pub fn selection<R, L, S>(
    problem: &Problem<'_, L, S>,
    population: &Population,
    elite_size: usize,
    parallel: bool,
    rng: &mut R,
) -> Result<Population, GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    if elite_size == 0 || elite_size > population.len() {
        return Err(GaError::InvalidConfiguration(format!(
            "elite_size {} incompatible with population of {}",
            elite_size,
            population.len()
        )));
    }

    let fitness = evaluate_population(problem, population, parallel)?;

    let mut order: Vec<usize> = (0..population.len()).collect();
    // Stable: equal fitness keeps original index order.
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut pool = Vec::with_capacity(2 * elite_size);
    for &index in order.iter().take(elite_size) {
        pool.push(population[index].clone());
    }
    for _ in 0..elite_size {
        let index = rng.random_range(0..population.len());
        pool.push(population[index].clone());
    }
    Ok(pool)
}
