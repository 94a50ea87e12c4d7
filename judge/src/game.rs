use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use reversi::{Disc, Game};
use tracing::trace;

use crate::error::IllegalAction;
use crate::player::Player;
use crate::recording::{Action, RecordedOutcome, Recorder};

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalAction },
}

/// Plays one game between the two players, who are assigned colors at random.
///
/// The first `opening_plies` moves are picked uniformly at random by the judge,
/// to vary the positions deterministic strategies get to see.
///
/// Returns an error only if the recording can't be written, not when an
/// illegal move is played.
pub fn play_game(
    rng: &mut StdRng,
    player_1: &mut Player,
    player_2: &mut Player,
    recorder: &mut Option<Recorder>,
    opening_plies: usize,
) -> anyhow::Result<GameResult> {
    // Assign one player the black discs and the other the white discs randomly
    let colors = {
        let mut arr = [Disc::Black, Disc::White];
        arr.shuffle(rng);
        arr
    };
    let players = [player_1, player_2];
    let black_idx = if colors[0] == Disc::Black { 0 } else { 1 };

    if let Some(rec) = recorder {
        rec.start_game(
            &players[black_idx].name,
            &players[1 - black_idx].name,
            opening_plies,
        );
    }

    let mut game = Game::new();
    for _ in 0..opening_plies {
        let Some(&coord) = game.puttable_coordinates().choose(rng) else {
            break;
        };
        record_action(recorder, game.current_player(), Action::Play(coord));
        game = game.play(coord)?;
    }

    while !game.is_finished() {
        let player = game.current_player();
        let player_idx = if player == colors[0] { 0 } else { 1 };
        let action = match players[player_idx].compute_move(&game) {
            Some(coord) => match game.play(coord) {
                Ok(next) => {
                    game = next;
                    Action::Play(coord)
                }
                Err(err) => {
                    return illegal_action(recorder, player, player_idx, IllegalAction::Move(err))
                }
            },
            None if game.can_play() => {
                let err = IllegalAction::PassedWithLegalMoves {
                    num_legal_moves: game.puttable_coordinates().len(),
                };
                return illegal_action(recorder, player, player_idx, err);
            }
            None => {
                game = game.skip_turn();
                Action::Pass
            }
        };
        record_action(recorder, player, action);
        trace!("{} played {:?}\n{}", player, action, game.board());
    }

    let score = game.result();
    if let Some(rec) = recorder {
        rec.write_game_recording(RecordedOutcome::Finished(score))?;
    }

    // Report who won
    let game_result = match score.winner {
        Disc::Empty => GameResult::Tie,
        winner => GameResult::WonByPlayer {
            player_idx: if winner == colors[0] { 0 } else { 1 },
        },
    };
    Ok(game_result)
}

fn record_action(recorder: &mut Option<Recorder>, player: Disc, action: Action) {
    if let Some(rec) = recorder {
        rec.store_action(player, action);
    }
}

fn illegal_action(
    recorder: &mut Option<Recorder>,
    player: Disc,
    player_idx: usize,
    err: IllegalAction,
) -> anyhow::Result<GameResult> {
    if let Some(rec) = recorder {
        rec.write_game_recording(RecordedOutcome::IllegalAction {
            player,
            reason: err.to_string(),
        })?;
    }
    Ok(GameResult::IllegalMoveByPlayer { player_idx, err })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use reversi::{Coordinate, Strategy, StrategyKind};

    use super::*;
    use crate::recording::GameRecording;

    struct AlwaysPass;

    impl Strategy for AlwaysPass {
        fn compute_move(&mut self, _game: &Game) -> Option<Coordinate> {
            None
        }
    }

    struct AlwaysCorner;

    impl Strategy for AlwaysCorner {
        fn compute_move(&mut self, _game: &Game) -> Option<Coordinate> {
            Some(Coordinate::new(0, 0).unwrap())
        }
    }

    fn player(kind: StrategyKind) -> Player {
        Player::new(&kind.to_string(), kind.build(1))
    }

    #[test]
    fn complete_games_have_a_result() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut greedy = player(StrategyKind::Greedy);
        let mut random = player(StrategyKind::Random);
        for _ in 0..10 {
            let result = play_game(&mut rng, &mut greedy, &mut random, &mut None, 4).unwrap();
            assert!(!matches!(result, GameResult::IllegalMoveByPlayer { .. }));
        }
    }

    #[test]
    fn passing_with_legal_moves_is_illegal() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut passer = Player::new("passer", Box::new(AlwaysPass));
        let mut greedy = player(StrategyKind::Greedy);
        let result = play_game(&mut rng, &mut passer, &mut greedy, &mut None, 0).unwrap();
        assert!(matches!(
            result,
            GameResult::IllegalMoveByPlayer {
                player_idx: 0,
                err: IllegalAction::PassedWithLegalMoves { .. }
            }
        ));
    }

    #[test]
    fn unplayable_moves_are_illegal() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut greedy = player(StrategyKind::Greedy);
        let mut corner = Player::new("corner", Box::new(AlwaysCorner));
        let result = play_game(&mut rng, &mut greedy, &mut corner, &mut None, 0).unwrap();
        assert!(matches!(
            result,
            GameResult::IllegalMoveByPlayer {
                player_idx: 1,
                err: IllegalAction::Move(reversi::IllegalMove::NoDiscsFlipped { .. })
            }
        ));
    }

    #[test]
    fn same_seed_same_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Some(Recorder::new(dir.path().to_path_buf()).unwrap());
        for _ in 0..2 {
            let mut rng = StdRng::seed_from_u64(99);
            let mut expert = player(StrategyKind::Expert);
            let mut random = player(StrategyKind::Random);
            play_game(&mut rng, &mut expert, &mut random, &mut recorder, 2).unwrap();
        }

        let read = |name: &str| -> GameRecording {
            let file = std::fs::File::open(dir.path().join(name)).unwrap();
            serde_json::from_reader(file).unwrap()
        };
        let first = read("game_000001.json");
        assert_eq!(first, read("game_000002.json"));
        assert_eq!(first.opening_plies, 2);
        assert_eq!(first.actions[0].player, Disc::Black);
        assert!(matches!(first.outcome, Some(RecordedOutcome::Finished(_))));

        // Replaying the actions reproduces the final score
        let mut game = Game::new();
        for recorded in &first.actions {
            assert_eq!(recorded.player, game.current_player());
            game = match recorded.action {
                Action::Play(coord) => game.play(coord).unwrap(),
                Action::Pass => game.skip_turn(),
            };
        }
        assert_eq!(first.outcome, Some(RecordedOutcome::Finished(game.result())));
    }
}
