//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::GaError;

/// Configuration for one GA run.
///
/// # Defaults
///
/// ```
/// use fragevo::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_size, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use fragevo::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_elite_size(15)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Only the first generation has this size: every later generation has
    /// `2 * elite_size` rows, the mating pool's size.
    pub population_size: usize,

    /// Number of top-fitness individuals carried unmodified into the mating
    /// pool each generation. The pool also gets this many random rows, so
    /// its size is `2 * elite_size`.
    pub elite_size: usize,

    /// Number of crossover cut points, strictly less than the key count.
    ///
    /// Zero is allowed: every child is then a copy of one parent.
    pub crossover_points: usize,

    /// Fraction of each individual's alleles rewritten per generation, in
    /// `[0, 1]`. The rewritten count is `floor(rate * len)`.
    pub mutation_rate: f64,

    /// Number of generations to run. The sole termination condition apart
    /// from an external cancellation flag.
    pub generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Does not affect results: evaluation draws no randomness.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_size: 20,
            crossover_points: 2,
            mutation_rate: 0.05,
            generations: 100,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite count per generation.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the number of crossover cut points.
    pub fn with_crossover_points(mut self, n: usize) -> Self {
        self.crossover_points = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters on their own.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.elite_size == 0 {
            return Err(GaError::InvalidConfiguration(
                "elite_size must be at least 1".into(),
            ));
        }
        if self.elite_size > self.population_size {
            return Err(GaError::InvalidConfiguration(format!(
                "elite_size {} exceeds population_size {}",
                self.elite_size, self.population_size
            )));
        }
        if self.population_size < 2 {
            return Err(GaError::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfiguration(format!(
                "mutation_rate {} must be in [0, 1]",
                self.mutation_rate
            )));
        }
        if self.generations == 0 {
            return Err(GaError::InvalidConfiguration(
                "generations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Validates the parameters against a run over `width` position keys.
    pub fn validate_for(&self, width: usize) -> Result<(), GaError> {
        self.validate()?;
        if self.crossover_points >= width {
            return Err(GaError::InvalidConfiguration(format!(
                "crossover_points {} must be less than the {} position keys",
                self.crossover_points, width
            )));
        }
        Ok(())
    }
}
