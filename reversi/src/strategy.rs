mod greedy;
mod heuristic;
mod random;
mod search;
mod weights;

pub use greedy::*;
pub use heuristic::*;
pub use random::*;
pub use search::*;
pub use weights::*;

use serde::{Deserialize, Serialize};

use crate::{Coordinate, Game};

/// A way of choosing moves for the player whose turn it is.
pub trait Strategy {
    /// Picks a move for [`Game::current_player()`].
    ///
    /// Returns `None` exactly when the game is finished or the current player has no
    /// legal move. In a running game the caller should answer it with
    /// [`Game::skip_turn()`]. Must not panic for any game state.
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        (**self).compute_move(game)
    }
}

/// Selects one of the built-in strategies, e.g. from a config file.
///
/// Serialized as `{"type": "alpha_beta", "depth": 5}`, where `depth` is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyKind {
    Random,
    Greedy,
    Expert,
    Strong,
    Minimax {
        #[serde(default = "default_minimax_depth")]
        depth: u32,
    },
    AlphaBeta {
        #[serde(default = "default_alpha_beta_depth")]
        depth: u32,
    },
}

fn default_minimax_depth() -> u32 {
    MINIMAX_DEPTH
}

fn default_alpha_beta_depth() -> u32 {
    ALPHA_BETA_DEPTH
}

impl StrategyKind {
    /// Instantiates the strategy. Only [`StrategyKind::Random`] uses the seed.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(Random::from_seed(seed)),
            StrategyKind::Greedy => Box::new(Greedy),
            StrategyKind::Expert => Box::new(Heuristic::expert()),
            StrategyKind::Strong => Box::new(Heuristic::strong()),
            StrategyKind::Minimax { depth } => Box::new(Minimax::new(depth)),
            StrategyKind::AlphaBeta { depth } => Box::new(AlphaBeta::new(depth)),
        }
    }

    /// One-off move computation with a freshly built strategy.
    pub fn compute_move(self, game: &Game, seed: u64) -> Option<Coordinate> {
        self.build(seed).compute_move(game)
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Random => write!(f, "random"),
            StrategyKind::Greedy => write!(f, "greedy"),
            StrategyKind::Expert => write!(f, "expert"),
            StrategyKind::Strong => write!(f, "strong"),
            StrategyKind::Minimax { depth } => write!(f, "minimax(depth {})", depth),
            StrategyKind::AlphaBeta { depth } => write!(f, "alpha_beta(depth {})", depth),
        }
    }
}

// The moves a strategy may choose from. Empty once the game is finished, even for
// a game built with `Game::from_parts` whose board would still allow moves.
pub(crate) fn candidate_moves(game: &Game) -> Vec<Coordinate> {
    if game.is_finished() {
        return Vec::new();
    }
    game.puttable_coordinates()
}

// Returns the candidate with the highest score. On ties, the earliest candidate wins.
pub(crate) fn first_best<T, I, F>(candidates: I, mut score: F) -> Option<(Coordinate, T)>
where
    T: PartialOrd,
    I: IntoIterator<Item = Coordinate>,
    F: FnMut(Coordinate) -> T,
{
    let mut best: Option<(Coordinate, T)> = None;
    for coord in candidates {
        let s = score(coord);
        let improves = match &best {
            Some((_, best_score)) => s > *best_score,
            None => true,
        };
        if improves {
            best = Some((coord, s));
        }
    }
    best
}
