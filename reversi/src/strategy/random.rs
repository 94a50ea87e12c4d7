use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{candidate_moves, Coordinate, Game, Strategy};

/// Picks uniformly among the legal moves.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Strategy for Random {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        candidate_moves(game).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn same_seed_same_choices() {
        let game = Game::new();
        let mut a = Random::from_seed(42);
        let mut b = Random::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.compute_move(&game), b.compute_move(&game));
        }
    }

    #[test]
    fn eventually_picks_every_legal_move() {
        let game = Game::new();
        let mut random = Random::from_seed(7);
        let picked: HashSet<Coordinate> = (0..200)
            .filter_map(|_| random.compute_move(&game))
            .collect();
        let legal: HashSet<Coordinate> = game.puttable_coordinates().into_iter().collect();
        assert_eq!(picked, legal);
    }
}
