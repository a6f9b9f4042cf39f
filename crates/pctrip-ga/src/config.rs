use pctrip_core::Graph;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Initializer/mutation pairing used by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Random sample of distinct cities between the two base stops, mutated by
    /// redrawing single genes. Connectivity is left to the penalty model.
    #[default]
    Uniform,
    /// Random walk over direct connections, mutated by re-linking genes to
    /// cities reachable from their predecessor.
    Connected,
}

/// Run parameters. Every field has a default so partial config files load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Stops in a route, both base stops included
    pub trip_length: usize,
    pub population_size: usize,
    pub generations: usize,
    /// Chance a consecutive pair of offspring is recombined
    pub crossover_prob: f64,
    /// Chance an offspring is passed to the mutation operator
    pub mutation_prob: f64,
    /// Per-gene chance inside the mutation operator
    pub gene_mutation_prob: f64,
    pub tournament_size: usize,
    pub hall_of_fame_size: usize,
    pub seed: u64,
    pub strategy: Strategy,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            trip_length: 7,
            population_size: 500,
            generations: 40,
            crossover_prob: 0.8,
            mutation_prob: 0.1,
            gene_mutation_prob: 0.1,
            tournament_size: 3,
            hall_of_fame_size: 1,
            seed: 80,
            strategy: Strategy::Uniform,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("trip length {0} cannot hold both base stops (minimum 2)")]
    TripTooShort(usize),

    #[error(
        "uniform initialization samples {required} distinct cities but the graph has {available}"
    )]
    NotEnoughCities { required: usize, available: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("tournament size must be at least 1")]
    InvalidTournamentSize,

    #[error("hall of fame size must be at least 1")]
    InvalidHallOfFameSize,
}

impl GaConfig {
    pub fn validate(&self, graph: &Graph) -> Result<(), ConfigError> {
        if self.trip_length < 2 {
            return Err(ConfigError::TripTooShort(self.trip_length));
        }
        if self.strategy == Strategy::Uniform && graph.num_cities() < self.interior_len() {
            return Err(ConfigError::NotEnoughCities {
                required: self.interior_len(),
                available: graph.num_cities(),
            });
        }
        for (name, value) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("gene_mutation_prob", self.gene_mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidTournamentSize);
        }
        if self.hall_of_fame_size == 0 {
            return Err(ConfigError::InvalidHallOfFameSize);
        }
        Ok(())
    }

    /// Number of free positions between the two base stops.
    pub fn interior_len(&self) -> usize {
        self.trip_length.saturating_sub(2)
    }
}
