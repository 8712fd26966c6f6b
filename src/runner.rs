//! Generational loop execution.
//!
//! [`GaRunner`] composes the stages end to end:
//! initialization → selection → crossover → mutation → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rand::Rng;

use crate::config::GaConfig;
use crate::energy::evaluate_population;
use crate::error::GaError;
use crate::operators::{crossover_population, mutate_population};
use crate::population::{initial_population, Individual, Population};
use crate::random::create_rng;
use crate::selection::selection;
use crate::types::{AlignmentScorer, FragmentLibrary, Problem};

/// Result of one GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The last population produced. Its size is `2 * elite_size` after the
    /// first transition, which may differ from the configured
    /// `population_size`.
    pub final_population: Population,

    /// The fittest individual observed across the whole run.
    pub best: Individual,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Number of generation transitions actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each generation's population, starting with the
    /// initial one. Not monotonic: mutation may degrade a generation's best
    /// even though elites always enter the mating pool unmodified.
    pub fitness_history: Vec<f64>,
}

/// Produces the next generation: selection → crossover → mutation.
///
/// The output has `2 * elite_size` rows — the mating pool's size — which
/// need not equal the input's size; the caller owns that drift. The input
/// population is never modified, so a failed transition leaves it intact.
pub fn next_generation<R, L, S>(
    problem: &Problem<'_, L, S>,
    population: &Population,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population, GaError>
where
    R: Rng + ?Sized,
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    let matingpool = selection(problem, population, config.elite_size, config.parallel, rng)?;
    let children = crossover_population(&matingpool, config.crossover_points, rng)?;
    mutate_population(problem, &children, config.mutation_rate, rng)
}

/// Executes the full evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA: initializes a population, then applies
    /// [`next_generation`] exactly `config.generations` times.
    ///
    /// There is no early stopping and no convergence check; the generation
    /// count is the sole termination condition.
    pub fn run<L, S>(problem: &Problem<'_, L, S>, config: &GaConfig) -> Result<GaResult, GaError>
    where
        L: FragmentLibrary + ?Sized,
        S: AlignmentScorer + ?Sized,
    {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// When `cancel` is set to `true`, the run stops at the next generation
    /// boundary and returns what was found so far. Per-generation semantics
    /// are unaffected.
    pub fn run_with_cancel<L, S>(
        problem: &Problem<'_, L, S>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError>
    where
        L: FragmentLibrary + ?Sized,
        S: AlignmentScorer + ?Sized,
    {
        if problem.keys.is_empty() {
            return Err(GaError::EmptyTopology);
        }
        config.validate_for(problem.width())?;

        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));

        let mut population = initial_population(problem, config.population_size, &mut rng)?;

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        let (mut best, mut best_fitness) = best_of(problem, &population, config.parallel)?;
        fitness_history.push(best_fitness);
        debug!(
            "initial population of {}: best fitness {best_fitness:.3}",
            population.len()
        );

        let mut cancelled = false;
        let mut completed = 0usize;
        for generation in 1..=config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = next_generation(problem, &population, config, &mut rng)?;
            completed = generation;

            let (generation_best, generation_fitness) =
                best_of(problem, &population, config.parallel)?;
            if generation_fitness > best_fitness {
                best = generation_best;
                best_fitness = generation_fitness;
            }
            fitness_history.push(generation_fitness);
            debug!(
                "generation {generation}: best fitness {generation_fitness:.3} (population {})",
                population.len()
            );
        }

        Ok(GaResult {
            final_population: population,
            best,
            best_fitness,
            generations: completed,
            cancelled,
            fitness_history,
        })
    }
}

/// Best individual of `population` by fitness; first index wins ties.
fn best_of<L, S>(
    problem: &Problem<'_, L, S>,
    population: &Population,
    parallel: bool,
) -> Result<(Individual, f64), GaError>
where
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    let fitness = evaluate_population(problem, population, parallel)?;
    let mut best_index = 0;
    for (index, &value) in fitness.iter().enumerate() {
        if value > fitness[best_index] {
            best_index = index;
        }
    }
    Ok((population[best_index].clone(), fitness[best_index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixture;
    use crate::topology::Topology;
    use crate::GaError;

    /// Three keys with two fragments each, one scored edge between the
    /// first two, constant pair score 5.
    fn fixture() -> Fixture {
        let mut topology = Topology::new();
        topology.add_edge("A", "B", vec![(0, 0)]);
        Fixture::new(&[("A", &["GG", "AA"]), ("B", &["CC", "TT"]), ("C", &["WW", "YY"])])
            .with_topology(topology)
            .with_score(5.0)
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_elite_size(5)
            .with_crossover_points(1)
            .with_mutation_rate(0.4)
            .with_generations(10)
            .with_parallel(false)
            .with_seed(42)
    }

    #[test]
    fn test_run_end_to_end() {
        let _ = env_logger::builder().is_test(true).try_init();
        let fx = fixture();
        let result = GaRunner::run(&fx.problem(), &config()).unwrap();

        assert_eq!(result.generations, 10);
        assert!(!result.cancelled);
        // Initial population plus one entry per generation.
        assert_eq!(result.fitness_history.len(), 11);
        // Size drifts to 2 * elite_size after the first transition.
        assert_eq!(result.final_population.len(), 10);
        assert!(result.final_population.iter().all(|ind| ind.len() == 3));

        // The running best never falls below the initial generation's best.
        assert!(result.best_fitness >= result.fitness_history[0]);
        // Best achievable here: edge scored 5, two active on the edge,
        // third key null = 5 - 2 = 3.
        assert!(result.best_fitness <= 3.0);
    }

    #[test]
    fn test_alleles_stay_in_bounds_throughout() {
        let fx = fixture();
        let result = GaRunner::run(&fx.problem(), &config()).unwrap();
        for individual in &result.final_population {
            assert!(individual.iter().all(|&allele| allele <= 2));
        }
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let fx = fixture();
        let a = GaRunner::run(&fx.problem(), &config()).unwrap();
        let b = GaRunner::run(&fx.problem(), &config()).unwrap();

        assert_eq!(a.final_population, b.final_population);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Evaluation draws no randomness, so the rng stream and therefore
        // the whole run are identical either way.
        let fx = fixture();
        let sequential = GaRunner::run(&fx.problem(), &config()).unwrap();
        let parallel =
            GaRunner::run(&fx.problem(), &config().with_parallel(true)).unwrap();

        assert_eq!(sequential.final_population, parallel.final_population);
        assert_eq!(sequential.fitness_history, parallel.fitness_history);
    }

    #[test]
    fn test_cancellation_stops_at_generation_boundary() {
        let fx = fixture();
        let cancel = Arc::new(AtomicBool::new(true)); // pre-set: stop before gen 1
        let result =
            GaRunner::run_with_cancel(&fx.problem(), &config(), Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        // Initial population untouched by any transition.
        assert_eq!(result.final_population.len(), 20);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_empty_keys_fail() {
        let fx = Fixture::new(&[]);
        assert_eq!(
            GaRunner::run(&fx.problem(), &config()).unwrap_err(),
            GaError::EmptyTopology
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let fx = fixture();
        // crossover_points == key count
        let bad = config().with_crossover_points(3);
        assert!(matches!(
            GaRunner::run(&fx.problem(), &bad),
            Err(GaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_next_generation_size_is_twice_elite() {
        let fx = fixture();
        let cfg = config();
        let mut rng = crate::random::create_rng(7);
        let population =
            initial_population(&fx.problem(), cfg.population_size, &mut rng).unwrap();

        let next = next_generation(&fx.problem(), &population, &cfg, &mut rng).unwrap();
        assert_eq!(next.len(), 2 * cfg.elite_size);
        assert_eq!(population.len(), cfg.population_size);
    }
}
