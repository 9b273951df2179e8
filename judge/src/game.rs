use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use reversi::{Color, Game, GameOutcome, IllegalAction};
use tracing::{debug, info, trace};

use crate::player::Player;
use crate::recording::Recorder;
use crate::MatchConfig;

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalActionByPlayer { player_idx: usize, err: IllegalAction },
}

/// Plays one game between the two players.
///
/// Returns an error only when a player fails to produce an action or the
/// recording cannot be written, not when an illegal action is played.
pub fn play_game(
    rng: &mut StdRng,
    player_1: &mut Player,
    player_2: &mut Player,
    config: &MatchConfig,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Randomly pick who plays dark, and therefore moves first
    let colors = {
        let mut arr = [Color::Dark, Color::Light];
        arr.shuffle(rng);
        arr
    };
    let mut players = [player_1, player_2];
    debug!(dark = %players[color_idx(&colors, Color::Dark)].name, "New game");

    if let Some(rec) = recorder {
        rec.start_game([
            (players[0].name.as_str(), colors[0]),
            (players[1].name.as_str(), colors[1]),
        ]);
    }

    let mut game = Game::init(config.board_length);
    let mut rejections = 0;
    let mut forfeit = None;
    while !game.is_game_over() {
        let color = game.current_color();
        let player_idx = color_idx(&colors, color);
        let player = &mut players[player_idx];
        let action = player.strategy().play(&game)?;
        match game.execute_action(action) {
            Ok(()) => {
                rejections = 0;
                debug!(player = %player.name, %color, ?action);
                trace!("\n{}", game.board());
                if let Some(rec) = recorder {
                    rec.store_action(color, action);
                }
            }
            Err(err) => {
                rejections += 1;
                info!(player = %player.name, rejections, "{}", err);
                if rejections > config.max_rejections {
                    forfeit = Some(GameResult::IllegalActionByPlayer { player_idx, err });
                    break;
                }
            }
        }
    }

    if let Some(rec) = recorder {
        let path = rec.write_game_recording(&game)?;
        debug!(path = %path.display(), "Recorded game");
    }

    if let Some(result) = forfeit {
        return Ok(result);
    }

    // Report who won
    let game_result = match game.outcome() {
        Some(GameOutcome::Winner(color)) => GameResult::WonByPlayer {
            player_idx: color_idx(&colors, color),
        },
        Some(GameOutcome::Tie) => GameResult::Tie,
        None => unreachable!("The game loop only ends when the game is over"),
    };
    Ok(game_result)
}

fn color_idx(colors: &[Color; 2], color: Color) -> usize {
    if colors[0] == color {
        0
    } else {
        1
    }
}
