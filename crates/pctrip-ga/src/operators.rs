//! Variation operators. All of them edit routes in place, so later positions
//! see the effect of earlier edits made in the same call.

use pctrip_core::Graph;
use rand::Rng;

use crate::config::Strategy;
use crate::init::guided_step;

/// Two-point crossover: swaps the segment `[c1, c2)` between the parents.
///
/// `c1` is drawn from `1..=len` and `c2` from `1..len`, bumped past `c1` so
/// the segment is never empty. Genes keep their positions, so each child only
/// holds values its parents had at the same index.
pub fn two_point_crossover<R: Rng + ?Sized>(a: &mut [usize], b: &mut [usize], rng: &mut R) {
    let size = a.len().min(b.len());
    if size < 2 {
        return;
    }

    let mut c1 = rng.gen_range(1..=size);
    let mut c2 = rng.gen_range(1..size);
    if c2 >= c1 {
        c2 += 1;
    } else {
        std::mem::swap(&mut c1, &mut c2);
    }

    a[c1..c2].swap_with_slice(&mut b[c1..c2]);
}

/// Redraws each interior gene with probability `indpb` from all city
/// indices. The base stops are left alone.
pub fn mutate_uniform<R: Rng + ?Sized>(
    route: &mut [usize],
    num_cities: usize,
    indpb: f64,
    rng: &mut R,
) {
    let len = route.len();
    if len < 3 {
        return;
    }
    for gene in &mut route[1..len - 1] {
        if rng.gen_bool(indpb) {
            *gene = rng.gen_range(0..num_cities);
        }
    }
}

/// Re-links the route around randomly chosen interior positions.
///
/// With probability `indpb` per interior position `i`, the gene at `i` is
/// replaced by a city reachable from the current gene at `i - 1`, and the gene
/// at `i + 1` by a city reachable from the new gene at `i`. Both base stops
/// are restored afterwards.
pub fn mutate_relink<R: Rng + ?Sized>(
    route: &mut [usize],
    graph: &Graph,
    indpb: f64,
    rng: &mut R,
) {
    let len = route.len();
    if len == 0 {
        return;
    }

    for i in 1..len.saturating_sub(1) {
        if rng.gen_bool(indpb) {
            route[i] = guided_step(graph, route[i - 1], rng);
            route[i + 1] = guided_step(graph, route[i], rng);
        }
    }

    let base = graph.base();
    route[0] = base;
    route[len - 1] = base;
}

/// Applies the mutation operator paired with `strategy`.
pub fn mutate<R: Rng + ?Sized>(
    strategy: Strategy,
    route: &mut [usize],
    graph: &Graph,
    indpb: f64,
    rng: &mut R,
) {
    match strategy {
        Strategy::Uniform => mutate_uniform(route, graph.num_cities(), indpb, rng),
        Strategy::Connected => mutate_relink(route, graph, indpb, rng),
    }
}
