use quickcheck::Arbitrary;

use crate::Game;

/// A position reached from the opening by a random sequence of legal moves.
#[derive(Clone, Debug)]
pub struct RandomPosition {
    pub game: Game,
    /// Number of discs placed since the opening.
    pub plies: usize,
}

impl Arbitrary for RandomPosition {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Anything from the opening to a (nearly) full board
        let target_plies = usize::from(u8::arbitrary(g) % 62);
        let mut game = Game::new();
        let mut plies = 0;
        while plies < target_plies && !game.is_finished() {
            let coords = game.puttable_coordinates();
            match g.choose(&coords) {
                Some(&coord) => {
                    game = game
                        .play(coord)
                        .expect("Puttable coordinate was rejected by play()");
                    plies += 1;
                }
                None => game = game.skip_turn(),
            }
        }
        RandomPosition { game, plies }
    }
}
