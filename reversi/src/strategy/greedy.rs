use tracing::debug;

use crate::{candidate_moves, first_best, Coordinate, Game, Strategy};

/// Takes the move that flips the most discs right now.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn compute_move(&mut self, game: &Game) -> Option<Coordinate> {
        let player = game.current_player();
        let (coord, flips) = first_best(candidate_moves(game), |coord| {
            game.board().count_flips(coord, player)
        })?;
        debug!(%coord, flips, "Greedy move");
        Some(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, Disc};

    #[test]
    fn takes_most_flips() {
        let game = Game::from_parts(
            "
            .BW.....
            ........
            ........
            ........
            .BBBBW..
            ........
            ........
            ........
            "
            .parse()
            .unwrap(),
            Disc::White,
            false,
        )
        .unwrap();
        assert_eq!(
            game.puttable_coordinates(),
            vec![coord!("a1"), coord!("a5")]
        );
        assert_eq!(Greedy.compute_move(&game), Some(coord!("a5")));
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        // All four opening moves flip exactly one disc
        assert_eq!(Greedy.compute_move(&Game::new()), Some(coord!("d3")));
    }
}
