//! Genetic search for a high-value round trip.
//!
//! The engine keeps infeasible routes in the population and ranks them on the
//! penalty floor of [`pctrip_core::fitness`], so the search can walk through
//! broken routes on its way to feasible ones.
//!
//! ```no_run
//! use pctrip_core::{Graph, GraphDescription};
//! use pctrip_ga::{evolve, GaConfig, Strategy};
//!
//! let desc = GraphDescription::from_json_str(&std::fs::read_to_string("graph.json")?)?;
//! let graph = Graph::from_description(&desc)?;
//! let config = GaConfig { strategy: Strategy::Connected, ..GaConfig::default() };
//! let result = evolve(&graph, config)?;
//! println!("{}", result.logbook);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod hall_of_fame;
pub mod individual;
pub mod init;
pub mod operators;
pub mod selection;
pub mod stats;

pub use config::{ConfigError, GaConfig, Strategy};
pub use engine::{evolve, Evolution, RunResult};
pub use hall_of_fame::HallOfFame;
pub use individual::Individual;
pub use stats::{Logbook, Statistics};
