use tracing::debug;

use crate::{candidate_moves, first_best, Coordinate, Game, Strategy, WeightTable};

/// Scores each legal move by the positional weight of its field plus a bonus per
/// flipped disc, and takes the best one.
///
/// There is no lookahead; see [`Minimax`](crate::Minimax) and
/// [`AlphaBeta`](crate::AlphaBeta) for that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heuristic {
    weights: WeightTable,
    flip_weight: f32,
}

impl Heuristic {
    pub fn new(weights: WeightTable, flip_weight: f32) -> Self {
        Self {
            weights,
            flip_weight,
        }
    }

    /// The full positional table, with flips as a tie-breaker of sorts.
    pub fn expert() -> Self {
        Self::new(WeightTable::EXPERT, 0.5)
    }

    /// Flip count plus a large bonus for corners.
    pub fn strong() -> Self {
        Self::new(WeightTable::CORNERS, 1.0)
    }

    pub fn score(&self, game: &Game, coord: Coordinate) -> f32 {
        let flips = game.board().count_flips(coord, game.current_player());
        self.weights.weight(coord) as f32 + flips as f32 * self.flip_weight
    }
}

impl Strategy for Heuristic {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        let (coord, score) =
            first_best(candidate_moves(game), |coord| self.score(game, coord))?;
        debug!(%coord, score, "Heuristic move");
        Some(coord)
    }
}
