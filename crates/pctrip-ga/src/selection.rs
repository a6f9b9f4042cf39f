use rand::Rng;

use crate::individual::Individual;

/// Runs `count` independent tournaments of `tournament_size` entrants drawn
/// with replacement and returns the index of each winner.
///
/// Winners are decided by cached fitness; the first drawn entrant wins ties.
/// No global ranking of the population is built.
pub fn tournament<R: Rng + ?Sized>(
    population: &[Individual],
    count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    if population.is_empty() || tournament_size == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let mut winner = rng.gen_range(0..population.len());
            for _ in 1..tournament_size {
                let entrant = rng.gen_range(0..population.len());
                if population[entrant].score() > population[winner].score() {
                    winner = entrant;
                }
            }
            winner
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn scored(fitness: &[f64]) -> Vec<Individual> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual {
                route: vec![0, i, 0],
                fitness: Some(f),
            })
            .collect()
    }

    #[test]
    fn returns_requested_number_of_winners() {
        let population = scored(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(20);
        let winners = tournament(&population, 10, 3, &mut rng);
        assert_eq!(winners.len(), 10);
        assert!(winners.iter().all(|&w| w < population.len()));
    }

    #[test]
    fn single_entrant_tournaments_pick_uniformly() {
        // With one entrant per tournament the choice is uniform
        let population = scored(&[-50.0, 10.0]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);
        let winners = tournament(&population, 200, 1, &mut rng);
        assert!(winners.contains(&0));
        assert!(winners.contains(&1));
    }

    #[test]
    fn pressure_favours_the_fittest() {
        let population = scored(&[-24.0, -20.0, 3.0, 12.0, 7.0]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(22);
        let winners = tournament(&population, 1000, 3, &mut rng);

        let best = winners.iter().filter(|&&w| w == 3).count();
        let worst = winners.iter().filter(|&&w| w == 0).count();
        // P(best wins) = 1 - (4/5)^3 = 0.488, P(worst wins) = (1/5)^3 = 0.008
        assert!(best > 400, "best won {best} times");
        assert!(worst < 30, "worst won {worst} times");
    }

    #[test]
    fn unevaluated_individuals_lose() {
        let mut population = scored(&[-100.0, -100.0]);
        population[1].fitness = None;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(23);
        // Large tournaments almost surely draw index 0 at least once
        let winners = tournament(&population, 50, 32, &mut rng);
        assert!(winners.iter().all(|&w| w == 0));
    }

    #[test]
    fn empty_population_selects_nothing() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(24);
        assert!(tournament(&[], 5, 3, &mut rng).is_empty());
    }
}
