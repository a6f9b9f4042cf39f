use crate::individual::Individual;

/// Best distinct individuals seen during a run, best first.
///
/// Entries are clones, so later mutation of the live population never
/// touches them.
#[derive(Clone, Debug)]
pub struct HallOfFame {
    capacity: usize,
    entries: Vec<Individual>,
}

impl HallOfFame {
    pub fn new(capacity: usize) -> Self {
        HallOfFame {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Offers every evaluated individual of `population`.
    ///
    /// An individual gets in while the hall has room, or when it is strictly
    /// fitter than the current worst entry. Routes already held are skipped.
    pub fn update(&mut self, population: &[Individual]) {
        if self.capacity == 0 {
            return;
        }

        for candidate in population {
            let Some(fitness) = candidate.fitness else {
                continue;
            };

            let has_room = self.entries.len() < self.capacity;
            let beats_worst = self.entries.last().is_some_and(|worst| fitness > worst.score());
            if !has_room && !beats_worst {
                continue;
            }
            if self.entries.iter().any(|e| e.route == candidate.route) {
                continue;
            }

            if !has_room {
                self.entries.pop();
            }
            // After existing entries of equal fitness
            let pos = self.entries.partition_point(|e| e.score() >= fitness);
            self.entries.insert(pos, candidate.clone());
        }
    }

    pub fn best(&self) -> Option<&Individual> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[Individual] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
