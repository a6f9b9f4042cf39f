use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pctrip_ga::{GaConfig, Strategy};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pctrip")]
#[command(about = "Genetic search for a high-reward round trip from a base city")]
pub struct Cli {
    /// Graph description (JSON with `cities` and `connections`). Defaults to the
    /// bundled nine-city map.
    #[arg(long)]
    pub graph: Option<PathBuf>,
    /// Run configuration (JSON). Flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stops per trip, both base stops included
    #[arg(long)]
    pub trip_length: Option<usize>,
    #[arg(long)]
    pub population: Option<usize>,
    #[arg(long)]
    pub generations: Option<usize>,
    /// Crossover probability per pair of offspring
    #[arg(long)]
    pub cxpb: Option<f64>,
    /// Mutation probability per offspring
    #[arg(long)]
    pub mutpb: Option<f64>,
    /// Mutation probability per gene
    #[arg(long)]
    pub indpb: Option<f64>,
    #[arg(long)]
    pub tournament_size: Option<usize>,
    #[arg(long)]
    pub hall_of_fame_size: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum)]
    pub strategy: Option<CliStrategy>,

    /// Write the per-generation statistics as JSON
    #[arg(long)]
    pub stats_out: Option<PathBuf>,
    /// Convergence chart (PNG)
    #[arg(long, default_value = "evolution.png")]
    pub chart: PathBuf,
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
    /// Skip printing the statistics table
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliStrategy {
    Uniform,
    Connected,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Uniform => Strategy::Uniform,
            CliStrategy::Connected => Strategy::Connected,
        }
    }
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn ga_config(&self) -> Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => GaConfig::default(),
        };

        if let Some(v) = self.trip_length {
            config.trip_length = v;
        }
        if let Some(v) = self.population {
            config.population_size = v;
        }
        if let Some(v) = self.generations {
            config.generations = v;
        }
        if let Some(v) = self.cxpb {
            config.crossover_prob = v;
        }
        if let Some(v) = self.mutpb {
            config.mutation_prob = v;
        }
        if let Some(v) = self.indpb {
            config.gene_mutation_prob = v;
        }
        if let Some(v) = self.tournament_size {
            config.tournament_size = v;
        }
        if let Some(v) = self.hall_of_fame_size {
            config.hall_of_fame_size = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.strategy {
            config.strategy = v.into();
        }

        Ok(config)
    }
}
