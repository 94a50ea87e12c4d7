use std::fmt;

use itertools::Itertools;

use crate::game::GameResult;

/// Outcome counts of a series of games between two players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub names: [String; 2],
    pub wins: [usize; 2],
    /// Illegal moves made by each player. Each one is also a win for the other player.
    pub illegal_moves: [usize; 2],
    pub ties: usize,
}

impl MatchScore {
    pub fn new(name_1: &str, name_2: &str) -> Self {
        Self {
            names: [String::from(name_1), String::from(name_2)],
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer { player_idx } => self.wins[*player_idx] += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.illegal_moves[*player_idx] += 1;
                self.wins[1 - player_idx] += 1;
            }
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }

    fn percentage(&self, count: usize) -> f32 {
        count as f32 / self.num_games().max(1) as f32 * 100.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vs {} after {} games:",
            self.names[0],
            self.names[1],
            self.num_games()
        )?;
        for idx in 0..2 {
            let wins = self.wins[idx];
            let percentage = self.percentage(wins);
            write!(f, "- {}: {} wins ({:.1}%)", self.names[idx], wins, percentage)?;
            let gifted = self.illegal_moves[1 - idx];
            if gifted > 0 {
                write!(
                    f,
                    ", {} of them through illegal moves by {}",
                    gifted,
                    self.names[1 - idx]
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "- ties: {} ({:.1}%)", self.ties, self.percentage(self.ties))
    }
}

/// One player's totals over all of their matchups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub illegal_moves: usize,
}

impl Standing {
    /// Two points per win, one per tie.
    pub fn points(&self) -> usize {
        2 * self.wins + self.ties
    }

    pub fn header() -> String {
        format!(
            " {:<19} | {:>6} | {:>6} | {:>6} | {:>7} | {:>6}",
            "player", "wins", "losses", "ties", "illegal", "points"
        )
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " {:<19} | {:>6} | {:>6} | {:>6} | {:>7} | {:>6}",
            self.name,
            self.wins,
            self.losses,
            self.ties,
            self.illegal_moves,
            self.points()
        )
    }
}

/// Totals per player, best first. Players with equal points keep the order in
/// which they first appear in `scores`.
pub fn standings(scores: &[MatchScore]) -> Vec<Standing> {
    let mut table: Vec<Standing> = Vec::new();
    for score in scores {
        for idx in 0..2 {
            let pos = match table.iter().position(|s| s.name == score.names[idx]) {
                Some(pos) => pos,
                None => {
                    table.push(Standing {
                        name: score.names[idx].clone(),
                        ..Standing::default()
                    });
                    table.len() - 1
                }
            };
            let standing = &mut table[pos];
            standing.wins += score.wins[idx];
            standing.losses += score.wins[1 - idx];
            standing.ties += score.ties;
            standing.illegal_moves += score.illegal_moves[idx];
        }
    }
    table
        .into_iter()
        .sorted_by_key(|s| std::cmp::Reverse(s.points()))
        .collect()
}
