use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use reversi::{Coordinate, Game, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Contents of a player config file, e.g.
/// `{"nick": "ab5", "strategy": {"type": "alpha_beta", "depth": 5}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub strategy: StrategyKind,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        Ok(config)
    }
}

pub struct Player {
    pub name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: String::from(name),
            strategy,
        }
    }

    pub fn from_config(config: &PlayerConfig, seed: u64) -> Self {
        Self::new(&config.nick, config.strategy.build(seed))
    }

    /// Asks the strategy for a move. `None` means the player passes.
    pub fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        let choice = self.strategy.compute_move(game);
        match choice {
            Some(coord) => trace!(player = &self.name, %coord, "Player moved"),
            None => trace!(player = &self.name, "Player passed"),
        }
        choice
    }
}
