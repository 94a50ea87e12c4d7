use tracing::{debug, trace};

use crate::{candidate_moves, first_best, Coordinate, Disc, Game, Strategy, WeightTable};

/// Default search depth of [`Minimax`].
pub const MINIMAX_DEPTH: u32 = 3;
/// Default search depth of [`AlphaBeta`], which can afford more thanks to pruning.
pub const ALPHA_BETA_DEPTH: u32 = 5;

/// The result of a search from the root position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Coordinate,
    /// The backed-up evaluation of `best_move`, from the point of view of the
    /// player to move at the root.
    pub score: i32,
    /// Number of positions visited, including the root.
    pub nodes: u64,
}

/// Plain fixed-depth minimax search.
///
/// Leaves are scored with [`WeightTable::evaluate()`] for the player who was to
/// move at the root. That player maximizes, the opponent minimizes. A position
/// where the side to move is stuck is searched further through a pass, which
/// costs one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minimax {
    depth: u32,
    weights: WeightTable,
}

/// Minimax with alpha-beta pruning.
///
/// Visits a subset of the positions [`Minimax`] visits at the same depth and
/// always picks the same move with the same score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphaBeta {
    depth: u32,
    weights: WeightTable,
}

impl Minimax {
    /// A depth of 0 is treated as 1, since at least the root's moves must be looked at.
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            weights: WeightTable::SEARCH,
        }
    }

    #[must_use]
    pub fn with_weights(self, weights: WeightTable) -> Self {
        Self { weights, ..self }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns `None` if the game is finished or the player to move has no legal move.
    pub fn search(&self, game: &Game) -> Option<SearchOutcome> {
        let side = game.current_player();
        let mut nodes = 1;
        let (best_move, score) = first_best(candidate_moves(game), |coord| {
            match game.play(coord) {
                Ok(child) => self.minimax(&child, self.depth - 1, side, &mut nodes),
                Err(_) => i32::MIN,
            }
        })?;
        trace!(nodes, depth = self.depth, "Minimax search finished");
        Some(SearchOutcome {
            best_move,
            score,
            nodes,
        })
    }

    fn minimax(&self, game: &Game, depth: u32, side: Disc, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == 0 || game.is_finished() {
            return self.weights.evaluate(game.board(), side);
        }
        let coords = game.puttable_coordinates();
        if coords.is_empty() {
            return self.minimax(&game.skip_turn(), depth - 1, side, nodes);
        }

        let maximizing = game.current_player() == side;
        let mut value = if maximizing { i32::MIN } else { i32::MAX };
        for child in coords.into_iter().filter_map(|coord| game.play(coord).ok()) {
            let child_value = self.minimax(&child, depth - 1, side, nodes);
            value = if maximizing {
                value.max(child_value)
            } else {
                value.min(child_value)
            };
        }
        value
    }
}

impl AlphaBeta {
    /// A depth of 0 is treated as 1, since at least the root's moves must be looked at.
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            weights: WeightTable::SEARCH,
        }
    }

    #[must_use]
    pub fn with_weights(self, weights: WeightTable) -> Self {
        Self { weights, ..self }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns `None` if the game is finished or the player to move has no legal move.
    pub fn search(&self, game: &Game) -> Option<SearchOutcome> {
        let side = game.current_player();
        let mut nodes = 1;
        // The root maximizes. Its beta stays unbounded, so only alpha tightens.
        let mut alpha = i32::MIN;
        let (best_move, score) = first_best(candidate_moves(game), |coord| {
            let value = match game.play(coord) {
                Ok(child) => {
                    self.alpha_beta(&child, self.depth - 1, alpha, i32::MAX, side, &mut nodes)
                }
                Err(_) => i32::MIN,
            };
            alpha = alpha.max(value);
            value
        })?;
        trace!(nodes, depth = self.depth, "Alpha-beta search finished");
        Some(SearchOutcome {
            best_move,
            score,
            nodes,
        })
    }

    // Fail-soft: if the true value lies within (alpha, beta) it is returned exactly,
    // otherwise the result is a bound on the same side of the window as the true value.
    fn alpha_beta(
        &self,
        game: &Game,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Disc,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 || game.is_finished() {
            return self.weights.evaluate(game.board(), side);
        }
        let coords = game.puttable_coordinates();
        if coords.is_empty() {
            return self.alpha_beta(&game.skip_turn(), depth - 1, alpha, beta, side, nodes);
        }

        let children = coords.into_iter().filter_map(|coord| game.play(coord).ok());
        if game.current_player() == side {
            let mut value = i32::MIN;
            for child in children {
                value = value.max(self.alpha_beta(&child, depth - 1, alpha, beta, side, nodes));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for child in children {
                value = value.min(self.alpha_beta(&child, depth - 1, alpha, beta, side, nodes));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Strategy for Minimax {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        let outcome = self.search(game)?;
        debug!(
            best_move = %outcome.best_move,
            score = outcome.score,
            nodes = outcome.nodes,
            "Minimax move"
        );
        Some(outcome.best_move)
    }
}

impl Strategy for AlphaBeta {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        let outcome = self.search(game)?;
        debug!(
            best_move = %outcome.best_move,
            score = outcome.score,
            nodes = outcome.nodes,
            "Alpha-beta move"
        );
        Some(outcome.best_move)
    }
}
