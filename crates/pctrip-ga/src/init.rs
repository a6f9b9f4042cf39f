use pctrip_core::Graph;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::config::Strategy;

/// Picks the next stop after `from`: uniformly among its direct connections,
/// or among all cities when `from` is a dead end.
pub fn guided_step<R: Rng + ?Sized>(graph: &Graph, from: usize, rng: &mut R) -> usize {
    let reachable = graph.neighbors(from);
    match reachable.choose(rng) {
        Some(&next) => next,
        None => rng.gen_range(0..graph.num_cities()),
    }
}

/// Base, then `trip_length - 2` distinct cities in sampled order, then base.
///
/// # Panics
///
/// If the graph has fewer than `trip_length - 2` cities or `trip_length < 2`.
/// [`crate::GaConfig::validate`] rejects both.
pub fn uniform_route<R: Rng + ?Sized>(
    graph: &Graph,
    trip_length: usize,
    rng: &mut R,
) -> Vec<usize> {
    let base = graph.base();
    let mut route = Vec::with_capacity(trip_length);
    route.push(base);
    route.extend(index::sample(rng, graph.num_cities(), trip_length - 2).into_iter());
    route.push(base);
    route
}

/// Random walk from the base over direct connections, closed at the base.
/// The closing hop is not checked, so the route may still be infeasible.
pub fn connected_route<R: Rng + ?Sized>(
    graph: &Graph,
    trip_length: usize,
    rng: &mut R,
) -> Vec<usize> {
    let base = graph.base();
    let mut route = Vec::with_capacity(trip_length);
    route.push(base);
    for _ in 1..trip_length.saturating_sub(1) {
        let prev = route[route.len() - 1];
        route.push(guided_step(graph, prev, rng));
    }
    route.push(base);
    route
}

pub fn new_route<R: Rng + ?Sized>(
    strategy: Strategy,
    graph: &Graph,
    trip_length: usize,
    rng: &mut R,
) -> Vec<usize> {
    match strategy {
        Strategy::Uniform => uniform_route(graph, trip_length, rng),
        Strategy::Connected => connected_route(graph, trip_length, rng),
    }
}
