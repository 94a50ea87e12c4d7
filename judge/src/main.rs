use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{
    play_game, standings, GameResult, MatchScore, Player, PlayerConfig, Recorder, Standing,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays reversi strategies against each other, every player against every other.
#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games to play per matchup
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random moves played before the players take over
    #[arg(long, value_name = "RANDOM_MOVES", default_value_t = 0)]
    opening: usize,

    /// Stop a matchup as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

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
    args: &Args,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let mut score = MatchScore::new(&player_1.name, &player_2.name);

    for game_idx in 0..args.num_games {
        let result = play_game(rng, player_1, player_2, recorder, args.opening)?;
        match &result {
            GameResult::WonByPlayer { player_idx } => {
                debug!(game_idx, winner = score.names[*player_idx], "Game won");
            }
            GameResult::Tie => debug!(game_idx, "Tie"),
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(game_idx, player = score.names[*player_idx], "Illegal move by player");
                for cause in std::iter::successors(Some(err as &dyn Error), |e: &&dyn Error| (*e).source()) {
                    info!("{}", cause);
                }
                if args.stop_on_illegal_move {
                    break;
                }
            }
        }
        score.record(&result);
    }

    eprintln!("{}", score);
    Ok(score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match &args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path.clone())?),
        None => None,
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<PlayerConfig>>>()?;
    for config in &player_configs {
        info!(nick = config.nick, strategy = %config.strategy, "Loaded player");
    }

    let mut scores = Vec::new();
    for (config_1, config_2) in player_configs.iter().tuple_combinations() {
        let mut player_1 = Player::from_config(config_1, rng.gen());
        let mut player_2 = Player::from_config(config_2, rng.gen());
        let score =
            play_matchup(&mut player_1, &mut player_2, &args, &mut rng, &mut recorder)?;
        scores.push(score);
    }

    if player_configs.len() > 2 {
        println!("\nStandings (2 points per win, 1 per tie):\n");
        println!("{}", Standing::header());
        for standing in standings(&scores) {
            println!("{}", standing);
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
