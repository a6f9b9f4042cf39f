use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::models::GraphDescription;

/// Immutable city graph for one run.
///
/// Costs live in a flattened `n * n` matrix. A zero entry means the two
/// cities are not directly connected, so a free edge cannot be expressed.
#[derive(Clone, Debug)]
pub struct Graph {
    names: Vec<String>,
    rewards: Vec<f64>,

    // Flattened, symmetric
    cost_mat: Vec<f64>,
    num_cities: usize,

    base: usize,
}

impl Graph {
    pub fn from_description(desc: &GraphDescription) -> Result<Self, GraphError> {
        let num_cities = desc.cities.len();
        if num_cities == 0 {
            return Err(GraphError::Empty);
        }

        let mut index = HashMap::with_capacity(num_cities);
        let mut base: Option<usize> = None;

        for (idx, city) in desc.cities.iter().enumerate() {
            if !city.reward.is_finite() || city.reward < 0.0 {
                return Err(GraphError::InvalidReward {
                    city: city.name.clone(),
                    reward: city.reward,
                });
            }
            if index.insert(city.name.clone(), idx).is_some() {
                return Err(GraphError::DuplicateCity(city.name.clone()));
            }
            if city.base {
                if let Some(first) = base {
                    return Err(GraphError::MultipleBases {
                        first: desc.cities[first].name.clone(),
                        second: city.name.clone(),
                    });
                }
                base = Some(idx);
            }
        }

        let base = base.ok_or(GraphError::MissingBase)?;

        let mut cost_mat = vec![0.0; num_cities * num_cities];
        for conn in &desc.connections {
            let lookup = |name: &str| {
                index.get(name).copied().ok_or_else(|| GraphError::UnknownCity {
                    from: conn.from.clone(),
                    to: conn.to.clone(),
                    missing: name.to_string(),
                })
            };
            let from = lookup(&conn.from)?;
            let to = lookup(&conn.to)?;

            if !conn.cost.is_finite() || conn.cost < 0.0 {
                return Err(GraphError::InvalidCost {
                    from: conn.from.clone(),
                    to: conn.to.clone(),
                    cost: conn.cost,
                });
            }

            // Mirror every entry, the input may list only one direction
            cost_mat[from * num_cities + to] = conn.cost;
            cost_mat[to * num_cities + from] = conn.cost;
        }

        debug!(
            cities = num_cities,
            connections = desc.connections.len(),
            base = %desc.cities[base].name,
            "built city graph"
        );

        Ok(Graph {
            names: desc.cities.iter().map(|c| c.name.clone()).collect(),
            rewards: desc.cities.iter().map(|c| c.reward).collect(),
            cost_mat,
            num_cities,
            base,
        })
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost_mat[from * self.num_cities + to]
    }

    #[inline(always)]
    pub fn is_connected(&self, from: usize, to: usize) -> bool {
        self.cost(from, to) > 0.0
    }

    #[inline(always)]
    pub fn reward(&self, city: usize) -> f64 {
        self.rewards[city]
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    pub fn name(&self, city: usize) -> &str {
        &self.names[city]
    }

    /// Cities reachable from `city` over a positive-cost edge, ascending.
    pub fn neighbors(&self, city: usize) -> Vec<usize> {
        let row = &self.cost_mat[city * self.num_cities..(city + 1) * self.num_cities];
        row.iter()
            .enumerate()
            .filter(|(_, cost)| **cost > 0.0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Maps a route to city names. Indices outside the graph render as `?`.
    pub fn route_names<'a>(&'a self, route: &[usize]) -> Vec<&'a str> {
        route
            .iter()
            .map(|&c| self.names.get(c).map(String::as_str).unwrap_or("?"))
            .collect()
    }
}
