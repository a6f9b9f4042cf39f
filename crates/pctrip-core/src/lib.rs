//! Shared types for the prize-collecting round trip problem: the graph input
//! model, the immutable [`Graph`] and the fitness/penalty model used to score
//! candidate routes.

pub mod error;
pub mod fitness;
pub mod graph;
pub mod models;

pub use error::GraphError;
pub use fitness::{assess, evaluate, is_feasible, penalty, raw_score, Evaluation, PENALTY_FLOOR};
pub use graph::Graph;
pub use models::{City, Connection, GraphDescription};
