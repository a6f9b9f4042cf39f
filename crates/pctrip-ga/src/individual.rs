use pctrip_core::{fitness, Graph};

/// A candidate route with its cached fitness.
///
/// `fitness` is `None` whenever the route changed since it was last scored.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    pub route: Vec<usize>,
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new(route: Vec<usize>) -> Self {
        Individual { route, fitness: None }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Scores the route if the cached value is stale. Returns whether an
    /// evaluation happened.
    pub fn evaluate(&mut self, graph: &Graph) -> bool {
        if self.fitness.is_some() {
            return false;
        }
        self.fitness = Some(fitness::evaluate(graph, &self.route));
        true
    }

    /// Cached fitness, with unevaluated individuals ranking below everything.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }
}
