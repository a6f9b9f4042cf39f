//! Route scoring.
//!
//! A feasible route scores the rewards of the distinct cities it visits minus
//! the cost of every hop. An infeasible route scores [`PENALTY_FLOOR`] lowered
//! by its [`penalty`], which keeps it below every feasible route while still
//! ranking "less broken" routes above "more broken" ones.

use serde::Serialize;

use crate::graph::Graph;

/// Fitness ceiling for infeasible routes.
pub const PENALTY_FLOOR: f64 = -20.0;
/// Penalty for a route that does not start (or end) at the base city.
pub const ENDPOINT_PENALTY: f64 = 20.0;
/// Penalty for each hop between two unconnected cities.
pub const BROKEN_HOP_PENALTY: f64 = 4.0;

/// Reward of the distinct cities visited. Revisits add nothing.
pub fn collected_reward(graph: &Graph, route: &[usize]) -> f64 {
    let mut seen = vec![false; graph.num_cities()];
    let mut reward = 0.0;
    for &city in route {
        if !seen[city] {
            seen[city] = true;
            reward += graph.reward(city);
        }
    }
    reward
}

/// Sum of every hop's cost, zero for unconnected hops.
pub fn travel_cost(graph: &Graph, route: &[usize]) -> f64 {
    route.windows(2).map(|hop| graph.cost(hop[0], hop[1])).sum()
}

pub fn raw_score(graph: &Graph, route: &[usize]) -> f64 {
    collected_reward(graph, route) - travel_cost(graph, route)
}

pub fn is_feasible(graph: &Graph, route: &[usize]) -> bool {
    let base = graph.base();
    match (route.first(), route.last()) {
        (Some(&first), Some(&last)) if first == base && last == base => route
            .windows(2)
            .all(|hop| graph.is_connected(hop[0], hop[1])),
        _ => false,
    }
}

/// Magnitude of infeasibility. Zero for a feasible route.
pub fn penalty(graph: &Graph, route: &[usize]) -> f64 {
    let base = graph.base();
    let mut q = 0.0;

    if route.first() != Some(&base) {
        q += ENDPOINT_PENALTY;
    }
    if route.last() != Some(&base) {
        q += ENDPOINT_PENALTY;
    }
    for hop in route.windows(2) {
        if !graph.is_connected(hop[0], hop[1]) {
            q += BROKEN_HOP_PENALTY;
        }
    }

    q
}

/// Fitness of a route: raw score when feasible, penalty floor otherwise.
pub fn evaluate(graph: &Graph, route: &[usize]) -> f64 {
    if is_feasible(graph, route) {
        raw_score(graph, route)
    } else {
        PENALTY_FLOOR - penalty(graph, route)
    }
}

/// Full breakdown of a route's score, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub reward: f64,
    pub cost: f64,
    pub feasible: bool,
    pub penalty: f64,
    pub fitness: f64,
}

/// Breaks a route's score into its parts. `fitness` is always the value
/// [`evaluate`] returns for the same route.
pub fn assess(graph: &Graph, route: &[usize]) -> Evaluation {
    Evaluation {
        reward: collected_reward(graph, route),
        cost: travel_cost(graph, route),
        feasible: is_feasible(graph, route),
        penalty: penalty(graph, route),
        fitness: evaluate(graph, route),
    }
}
