use serde::Serialize;
use std::fmt;

use crate::individual::Individual;

/// Fitness summary of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub gen: usize,
    /// Evaluations performed to produce this generation
    pub nevals: usize,
    pub avg: f64,
    /// Population standard deviation
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Statistics {
    /// Summarizes the cached fitness of every evaluated individual.
    pub fn compute(gen: usize, nevals: usize, population: &[Individual]) -> Self {
        let values: Vec<f64> = population.iter().filter_map(|ind| ind.fitness).collect();
        if values.is_empty() {
            return Statistics {
                gen,
                nevals,
                avg: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let count = values.len() as f64;
        let avg = values.iter().sum::<f64>() / count;
        let var = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / count;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Statistics {
            gen,
            nevals,
            avg,
            std: var.sqrt(),
            min,
            max,
        }
    }
}

/// Append-only log of per-generation statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Logbook {
    records: Vec<Statistics>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: Statistics) {
        self.records.push(stats);
    }

    pub fn records(&self) -> &[Statistics] {
        &self.records
    }

    pub fn last(&self) -> Option<&Statistics> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4} {:>7} {:>10} {:>10} {:>10} {:>10}",
            "gen", "nevals", "avg", "std", "min", "max"
        )?;
        for s in &self.records {
            writeln!(
                f,
                "{:>4} {:>7} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                s.gen, s.nevals, s.avg, s.std, s.min, s.max
            )?;
        }
        Ok(())
    }
}
