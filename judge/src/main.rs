use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{
    format_standings, play_game, standings, GameResult, MatchConfig, MatchScore, Player,
    PlayerKind, Recorder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Parser)]
struct Args {
    /// The players taking part, every pair plays a match
    #[clap(num_args(2..), value_delimiter = ' ', required = true)]
    players: Vec<PlayerKind>,

    /// How many games to play per match
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// Side length of the board, even and at least 4
    #[arg(short, long, default_value_t = 8)]
    board_length: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How many illegal actions in a row a player may submit before forfeiting the game
    #[arg(long, default_value_t = 10)]
    max_rejections: usize,

    /// Stop the match as soon as one player forfeits by illegal actions
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_action: bool,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn play_matchup(
    player_1: &mut Player,
    player_2: &mut Player,
    num_games: usize,
    rng: &mut StdRng,
    config: &MatchConfig,
    stop_on_illegal_action: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let player_names = [player_1.name.clone(), player_2.name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        match play_game(rng, player_1, player_2, config, recorder)? {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = %player_names[player_idx], game_idx);
                match_score.wins[player_idx] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
            GameResult::IllegalActionByPlayer { player_idx, err } => {
                info!(
                    player = %player_names[player_idx],
                    game_idx, "Forfeit after illegal action: {}", err
                );
                if stop_on_illegal_action {
                    break;
                } else {
                    match_score.wins[1 - player_idx] += 1;
                    match_score.illegal_actions[player_idx] += 1;
                }
            }
        }
    }

    let paren = |opponent_idx: usize| {
        if match_score.illegal_actions[opponent_idx] > 0 {
            format!(
                " ({} through forfeits by {})",
                match_score.illegal_actions[opponent_idx], player_names[opponent_idx]
            )
        } else {
            String::new()
        }
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} ties",
        match_score.wins[0],
        player_names[0],
        paren(1),
        match_score.wins[1],
        player_names[1],
        paren(0),
        match_score.ties
    );

    Ok(match_score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    anyhow::ensure!(
        args.board_length >= 4 && args.board_length % 2 == 0,
        "The board length must be even and at least 4, got {}",
        args.board_length
    );
    let config = MatchConfig {
        board_length: args.board_length,
        max_rejections: args.max_rejections,
    };

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut players: Vec<Player> = args
        .players
        .iter()
        .enumerate()
        .map(|(idx, &kind)| Player::from_kind(kind, idx, &mut rng))
        .collect();
    let names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();

    let matchups: Vec<(usize, usize)> = (0..players.len()).tuple_combinations().collect();

    let mut match_results: Vec<((usize, usize), MatchScore)> = Vec::new();
    for (i1, i2) in matchups {
        // i1 < i2, so splitting at i2 puts them on different sides
        let (left, right) = players.split_at_mut(i2);
        let match_score = play_matchup(
            &mut left[i1],
            &mut right[0],
            args.num_games,
            &mut rng,
            &config,
            args.stop_on_illegal_action,
            &mut recorder,
        )?;

        match_results.push(((i1, i2), match_score));
    }

    if players.len() > 2 {
        println!("\nTournament standings:\n");
        print!("{}", format_standings(&standings(&names, &match_results)));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    // Stdout is reserved for human players and the standings
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(Targets::new().with_default(level));
    tracing_subscriber::registry().with(layer).init();
}
