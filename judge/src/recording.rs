use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use reversi::{Color, Game, Position};
use serde::{Deserialize, Serialize};

/// Writes every game of a tournament to its own JSON file.
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

    /// Discards any unfinished recording and starts a new one.
    pub fn start_game(&mut self, players: [(&str, Color); 2]) {
        self.current = Some(GameRecording {
            players: players
                .into_iter()
                .map(|(name, color)| PlayerRecord {
                    name: String::from(name),
                    color,
                })
                .collect(),
            actions: Vec::new(),
            final_board: String::new(),
            dark: 0,
            light: 0,
        });
    }

    pub fn store_action(&mut self, color: Color, action: Option<Position>) {
        if let Some(recording) = &mut self.current {
            recording.actions.push(ActionRecord { color, action });
        }
    }

    /// Writes the recording of the current game, returning the path of the file.
    pub fn write_game_recording(&mut self, game: &Game) -> anyhow::Result<PathBuf> {
        let mut recording = self
            .current
            .take()
            .ok_or_else(|| anyhow::anyhow!("No game recording was started"))?;
        recording.final_board = game.board().to_string();
        (recording.dark, recording.light) = game.score();

        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Vec<PlayerRecord>,
    pub actions: Vec<ActionRecord>,
    pub final_board: String,
    pub dark: usize,
    pub light: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub color: Color,
}

/// One accepted action. `action` is `null` for a pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionRecord {
    pub color: Color,
    pub action: Option<Position>,
}
