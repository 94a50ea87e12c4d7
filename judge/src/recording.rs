use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use reversi::{Coordinate, Disc};
use serde::{Deserialize, Serialize};

/// One action as it appears in a recording: `{"play": "c4"}` or `"pass"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Play(Coordinate),
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAction {
    pub player: Disc,
    pub action: Action,
}

/// How a recorded game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordedOutcome {
    Finished(reversi::GameResult),
    IllegalAction { player: Disc, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub black: String,
    pub white: String,
    /// The first `opening_plies` actions were chosen at random by the judge.
    pub opening_plies: usize,
    pub actions: Vec<RecordedAction>,
    pub outcome: Option<RecordedOutcome>,
}

/// Writes every game into its own numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    /// Discards anything recorded since the last call to [`Self::write_game_recording()`].
    pub fn start_game(&mut self, black: &str, white: &str, opening_plies: usize) {
        self.current = Some(GameRecording {
            black: String::from(black),
            white: String::from(white),
            opening_plies,
            actions: Vec::new(),
            outcome: None,
        });
    }

    pub fn store_action(&mut self, player: Disc, action: Action) {
        if let Some(recording) = &mut self.current {
            recording.actions.push(RecordedAction { player, action });
        }
    }

    /// Returns the path of the written file.
    pub fn write_game_recording(&mut self, outcome: RecordedOutcome) -> anyhow::Result<PathBuf> {
        let Some(mut recording) = self.current.take() else {
            anyhow::bail!("No game was started before writing the recording");
        };
        recording.outcome = Some(outcome);
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}
