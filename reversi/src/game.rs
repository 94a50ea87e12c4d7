use serde::{Deserialize, Serialize};

use crate::{Board, Coordinate, Disc, IllegalMove, InvalidCurrentPlayer};

/// A game in progress (or over): the board, whose turn it is, and whether it has ended.
///
/// Like [`Board`], a `Game` is never modified in place. [`Self::play()`] and
/// [`Self::skip_turn()`] return the successor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    /// Always [`Disc::Black`] or [`Disc::White`].
    current_player: Disc,
    /// Once set, neither the board nor the current player change anymore.
    finished: bool,
}

/// Score summary of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub black: usize,
    pub white: usize,
    /// [`Disc::Empty`] while the game is running, and for a draw.
    pub winner: Disc,
}

impl Game {
    /// The standard opening with black to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            current_player: Disc::Black,
            finished: false,
        }
    }

    /// Creates a game from an arbitrary state, e.g. for tests or analysis.
    ///
    /// The state is taken as given; in particular `finished` is not recomputed.
    pub fn from_parts(
        board: Board,
        current_player: Disc,
        finished: bool,
    ) -> Result<Self, InvalidCurrentPlayer> {
        if current_player.is_empty() {
            return Err(InvalidCurrentPlayer);
        }
        Ok(Self {
            board,
            current_player,
            finished,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Disc {
        self.current_player
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn disc_at(&self, coord: Coordinate) -> Disc {
        self.board.disc_at(coord)
    }

    /// Places a disc of the current player at `coord`.
    ///
    /// If the opponent has no reply on the resulting board, they pass automatically
    /// and the same player is to move again. If nobody can move, the game is over.
    pub fn play(&self, coord: Coordinate) -> Result<Game, IllegalMove> {
        if self.finished {
            return Err(IllegalMove::GameFinished);
        }
        let existing = self.board.disc_at(coord);
        if !existing.is_empty() {
            return Err(IllegalMove::Occupied {
                coord,
                disc: existing,
            });
        }
        if !self.board.is_legal_move(coord, self.current_player) {
            return Err(IllegalMove::NoDiscsFlipped { coord });
        }

        let board = self.board.apply_move(coord, self.current_player);
        let opponent = self.current_player.flip();
        let (current_player, finished) = if board.has_valid_move(opponent) {
            (opponent, false)
        } else if board.has_valid_move(self.current_player) {
            (self.current_player, false)
        } else {
            (self.current_player, true)
        };
        Ok(Game {
            board,
            current_player,
            finished,
        })
    }

    /// Passes the turn to the opponent without placing a disc.
    ///
    /// Does nothing once the game is finished.
    #[must_use]
    pub fn skip_turn(&self) -> Game {
        if self.finished {
            return *self;
        }
        let current_player = self.current_player.flip();
        let finished = !self.board.has_valid_move(current_player)
            && !self.board.has_valid_move(current_player.flip());
        Game {
            board: self.board,
            current_player,
            finished,
        }
    }

    /// Can the current player place a disc at `coord`?
    pub fn is_puttable(&self, coord: Coordinate) -> bool {
        self.board.is_legal_move(coord, self.current_player)
    }

    /// Does the current player have any legal move?
    pub fn can_play(&self) -> bool {
        self.board.has_valid_move(self.current_player)
    }

    /// The legal moves of the current player in row-major order.
    ///
    /// Strategies that break ties by taking the first candidate rely on this order.
    pub fn puttable_coordinates(&self) -> Vec<Coordinate> {
        self.board.legal_moves(self.current_player)
    }

    pub fn result(&self) -> GameResult {
        let black = self.board.count_discs(Disc::Black);
        let white = self.board.count_discs(Disc::White);
        let winner = if !self.finished {
            Disc::Empty
        } else {
            match black.cmp(&white) {
                std::cmp::Ordering::Greater => Disc::Black,
                std::cmp::Ordering::Less => Disc::White,
                std::cmp::Ordering::Equal => Disc::Empty,
            }
        };
        GameResult {
            black,
            white,
            winner,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::RandomPosition;
    use crate::coord;

    fn game_from(diagram: &str, current_player: Disc) -> Game {
        Game::from_parts(diagram.parse().unwrap(), current_player, false).unwrap()
    }

    quickcheck! {
        fn unfinished_games_have_a_mover(pos: RandomPosition) -> bool {
            // Automatic passes mean that whoever is to move can move.
            pos.game.is_finished() || pos.game.can_play()
        }

        fn finished_means_nobody_can_move(pos: RandomPosition) -> bool {
            let board = pos.game.board();
            pos.game.is_finished()
                == (!board.has_valid_move(Disc::Black) && !board.has_valid_move(Disc::White))
        }

        fn every_move_adds_one_disc(pos: RandomPosition) -> bool {
            let GameResult { black, white, .. } = pos.game.result();
            black + white == 4 + pos.plies && pos.game.board().empty_count() == 60 - pos.plies
        }

        fn winner_matches_counts(pos: RandomPosition) -> bool {
            let GameResult { black, white, winner } = pos.game.result();
            if !pos.game.is_finished() {
                return winner == Disc::Empty;
            }
            match black.cmp(&white) {
                std::cmp::Ordering::Greater => winner == Disc::Black,
                std::cmp::Ordering::Less => winner == Disc::White,
                std::cmp::Ordering::Equal => winner == Disc::Empty,
            }
        }
    }

    #[test]
    fn initial_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Disc::Black);
        assert!(!game.is_finished());
        assert!(game.can_play());
        assert_eq!(
            game.puttable_coordinates(),
            vec![coord!("d3"), coord!("c4"), coord!("f5"), coord!("e6")]
        );
        assert_eq!(
            game.result(),
            GameResult {
                black: 2,
                white: 2,
                winner: Disc::Empty
            }
        );
    }

    #[test]
    fn from_parts_rejects_empty_player() {
        assert_eq!(
            Game::from_parts(Board::initial(), Disc::Empty, false),
            Err(InvalidCurrentPlayer)
        );
    }

    #[test]
    fn play_switches_turn() {
        let game = Game::new();
        let next = game.play(coord!("c4")).unwrap();
        assert_eq!(next.current_player(), Disc::White);
        assert_eq!(next.disc_at(coord!("c4")), Disc::Black);
        assert_eq!(next.disc_at(coord!("d4")), Disc::Black);
        assert!(!next.is_finished());
        // The original game is unchanged
        assert_eq!(game, Game::new());
    }

    #[test]
    fn play_rejects_illegal_moves() {
        let game = Game::new();
        assert_eq!(
            game.play(coord!("d4")),
            Err(IllegalMove::Occupied {
                coord: coord!("d4"),
                disc: Disc::White
            })
        );
        assert_eq!(
            game.play(coord!("a1")),
            Err(IllegalMove::NoDiscsFlipped {
                coord: coord!("a1")
            })
        );
        let finished = Game::from_parts(Board::initial(), Disc::Black, true).unwrap();
        assert_eq!(
            finished.play(coord!("c4")),
            Err(IllegalMove::GameFinished)
        );
    }

    #[test]
    fn opponent_without_reply_passes_automatically() {
        let game = game_from(
            "
            BWW.....
            ........
            W.......
            B.......
            ........
            ........
            ........
            ........
            ",
            Disc::Black,
        );
        let next = game.play(coord!("a2")).unwrap();
        assert_eq!(next.disc_at(coord!("a3")), Disc::Black);
        assert!(!next.board().has_valid_move(Disc::White));
        assert_eq!(next.current_player(), Disc::Black);
        assert!(!next.is_finished());
        assert_eq!(next.puttable_coordinates(), vec![coord!("d1")]);
    }

    #[test]
    fn game_ends_when_nobody_can_move() {
        let game = game_from(
            "
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
            Disc::Black,
        );
        let next = game.play(coord!("c1")).unwrap();
        assert!(next.is_finished());
        assert_eq!(next.current_player(), Disc::Black);
        assert_eq!(
            next.result(),
            GameResult {
                black: 3,
                white: 0,
                winner: Disc::Black
            }
        );

        // Passing a finished game changes nothing
        let skipped = next.skip_turn();
        assert_eq!(skipped, next);
        assert_eq!(skipped.skip_turn().current_player(), Disc::Black);
    }

    #[test]
    fn skip_turn_twice_returns_to_same_player() {
        let game = Game::new();
        let once = game.skip_turn();
        assert_eq!(once.current_player(), Disc::White);
        assert!(!once.is_finished());
        let twice = once.skip_turn();
        assert_eq!(twice.current_player(), Disc::Black);
        assert_eq!(twice.board(), game.board());
        assert_eq!(twice, game);
    }

    #[test]
    fn skip_turn_detects_end_of_game() {
        let full = Board::from_discs(Coordinate::all().map(|c| {
            let disc = if c.y() < 5 { Disc::White } else { Disc::Black };
            (c, disc)
        }));
        let game = Game::from_parts(full, Disc::Black, false).unwrap();
        assert!(!game.can_play());
        let skipped = game.skip_turn();
        assert!(skipped.is_finished());
        assert_eq!(skipped.current_player(), Disc::White);
        assert_eq!(skipped.result().winner, Disc::White);
    }

    #[test]
    fn draw_has_no_winner() {
        let full = Board::from_discs(Coordinate::all().map(|c| {
            let disc = if c.y() < 4 { Disc::White } else { Disc::Black };
            (c, disc)
        }));
        let game = Game::from_parts(full, Disc::White, true).unwrap();
        assert_eq!(
            game.result(),
            GameResult {
                black: 32,
                white: 32,
                winner: Disc::Empty
            }
        );
    }
}
