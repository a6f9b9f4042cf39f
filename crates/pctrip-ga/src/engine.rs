use pctrip_core::Graph;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, instrument};

use crate::config::{ConfigError, GaConfig};
use crate::hall_of_fame::HallOfFame;
use crate::individual::Individual;
use crate::init::new_route;
use crate::operators::{mutate, two_point_crossover};
use crate::selection::tournament;
use crate::stats::{Logbook, Statistics};

/// Everything a finished run hands back.
#[derive(Clone, Debug)]
pub struct RunResult {
    pub population: Vec<Individual>,
    pub hall_of_fame: HallOfFame,
    pub logbook: Logbook,
}

impl RunResult {
    pub fn best(&self) -> Option<&Individual> {
        self.hall_of_fame.best()
    }
}

/// Generational genetic algorithm over one graph.
///
/// A run is a pure function of (graph, config): the only randomness is a
/// xoshiro256++ generator seeded from `config.seed`.
pub struct Evolution<'a> {
    graph: &'a Graph,
    config: GaConfig,
    rng: Xoshiro256PlusPlus,
}

impl<'a> Evolution<'a> {
    pub fn new(graph: &'a Graph, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate(graph)?;
        let rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        Ok(Evolution { graph, config, rng })
    }

    /// Runs generation 0 plus `config.generations` generations of selection,
    /// variation and evaluation. There is no early stopping.
    #[instrument(level = "info", skip(self), fields(
        strategy = ?self.config.strategy,
        population = self.config.population_size,
        generations = self.config.generations,
        seed = self.config.seed
    ))]
    pub fn run(mut self) -> RunResult {
        let mut hall_of_fame = HallOfFame::new(self.config.hall_of_fame_size);
        let mut logbook = Logbook::new();

        let mut population = self.initial_population();
        let nevals = self.evaluate(&mut population);
        hall_of_fame.update(&population);
        self.record(&mut logbook, 0, nevals, &population);

        for gen in 1..=self.config.generations {
            let mut offspring = self.select(&population);
            self.vary(&mut offspring);
            let nevals = self.evaluate(&mut offspring);

            hall_of_fame.update(&offspring);
            population = offspring;
            self.record(&mut logbook, gen, nevals, &population);
        }

        if let Some(best) = hall_of_fame.best() {
            info!(fitness = ?best.fitness, route = ?best.route, "evolution finished");
        }

        RunResult {
            population,
            hall_of_fame,
            logbook,
        }
    }

    fn initial_population(&mut self) -> Vec<Individual> {
        let graph = self.graph;
        let Self { config, rng, .. } = self;
        (0..config.population_size)
            .map(|_| Individual::new(new_route(config.strategy, graph, config.trip_length, rng)))
            .collect()
    }

    /// Scores every individual without a valid cached fitness. Returns how
    /// many were scored.
    fn evaluate(&self, population: &mut [Individual]) -> usize {
        population
            .iter_mut()
            .map(|ind| ind.evaluate(self.graph))
            .filter(|&scored| scored)
            .count()
    }

    /// Tournament winners, cloned so the offspring can be edited freely.
    fn select(&mut self, population: &[Individual]) -> Vec<Individual> {
        tournament(
            population,
            population.len(),
            self.config.tournament_size,
            &mut self.rng,
        )
        .into_iter()
        .map(|idx| population[idx].clone())
        .collect()
    }

    /// Crossover on consecutive pairs, then mutation per offspring. Anything
    /// touched loses its cached fitness.
    fn vary(&mut self, offspring: &mut [Individual]) {
        let graph = self.graph;
        let Self { config, rng, .. } = self;

        for pair in offspring.chunks_exact_mut(2) {
            if rng.gen_bool(config.crossover_prob) {
                let (left, right) = pair.split_at_mut(1);
                two_point_crossover(&mut left[0].route, &mut right[0].route, rng);
                left[0].invalidate();
                right[0].invalidate();
            }
        }

        for ind in offspring.iter_mut() {
            if rng.gen_bool(config.mutation_prob) {
                mutate(config.strategy, &mut ind.route, graph, config.gene_mutation_prob, rng);
                ind.invalidate();
            }
        }
    }

    fn record(&self, logbook: &mut Logbook, gen: usize, nevals: usize, population: &[Individual]) {
        let stats = Statistics::compute(gen, nevals, population);
        debug!(
            gen,
            nevals,
            avg = stats.avg,
            std = stats.std,
            min = stats.min,
            max = stats.max,
            "generation"
        );
        logbook.record(stats);
    }
}

/// Validates `config` and runs it to completion.
pub fn evolve(graph: &Graph, config: GaConfig) -> Result<RunResult, ConfigError> {
    Ok(Evolution::new(graph, config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use pctrip_core::GraphDescription;
    use serde_json::json;

    fn small_graph() -> Graph {
        let desc: GraphDescription = serde_json::from_value(json!({
            "cities": [
                { "name": "Base", "reward": 0, "base": true },
                { "name": "A", "reward": 4 },
                { "name": "B", "reward": 6 },
                { "name": "C", "reward": 5 },
                { "name": "D", "reward": 3 }
            ],
            "connections": [
                { "from": "Base", "to": "A", "cost": 1 },
                { "from": "A", "to": "B", "cost": 2 },
                { "from": "B", "to": "C", "cost": 1 },
                { "from": "C", "to": "Base", "cost": 2 },
                { "from": "C", "to": "D", "cost": 1 },
                { "from": "D", "to": "Base", "cost": 1 }
            ]
        }))
        .unwrap();
        Graph::from_description(&desc).unwrap()
    }

    fn config(strategy: Strategy) -> GaConfig {
        GaConfig {
            trip_length: 5,
            population_size: 40,
            generations: 15,
            strategy,
            ..GaConfig::default()
        }
    }

    #[test]
    fn logs_one_record_per_generation() {
        let graph = small_graph();
        let result = evolve(&graph, config(Strategy::Uniform)).unwrap();
        assert_eq!(result.logbook.len(), 16);
        for (i, stats) in result.logbook.records().iter().enumerate() {
            assert_eq!(stats.gen, i);
            assert!(stats.min <= stats.avg && stats.avg <= stats.max);
        }
        // Generation 0 scores everybody
        assert_eq!(result.logbook.records()[0].nevals, 40);
    }

    #[test]
    fn population_size_is_constant() {
        let graph = small_graph();
        for strategy in [Strategy::Uniform, Strategy::Connected] {
            let result = evolve(&graph, config(strategy)).unwrap();
            assert_eq!(result.population.len(), 40);
            assert!(result.population.iter().all(|ind| ind.is_evaluated()));
            assert!(result.population.iter().all(|ind| ind.route.len() == 5));
        }
    }

    #[test]
    fn hall_of_fame_never_trails_the_population() {
        let graph = small_graph();
        let result = evolve(&graph, config(Strategy::Connected)).unwrap();
        let best = result.best().unwrap().score();
        for stats in result.logbook.records() {
            assert!(best >= stats.max);
        }
    }

    #[test]
    fn without_variation_nothing_is_reevaluated() {
        let graph = small_graph();
        let cfg = GaConfig {
            crossover_prob: 0.0,
            mutation_prob: 0.0,
            ..config(Strategy::Uniform)
        };
        let result = evolve(&graph, cfg).unwrap();
        assert!(result.logbook.records()[1..].iter().all(|s| s.nevals == 0));
    }

    #[test]
    fn rejects_invalid_config() {
        let graph = small_graph();
        let cfg = GaConfig {
            trip_length: 0,
            ..GaConfig::default()
        };
        assert!(matches!(evolve(&graph, cfg), Err(ConfigError::TripTooShort(0))));
    }
}
