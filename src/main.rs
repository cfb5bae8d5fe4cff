mod config;
mod constants;
mod game;

use std::panic;
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, info};

use game::board::Side;
use game::player::{EnginePlayer, Player, RandomPlayer};
use game::search::SearchConfig;
use game::GameOutcome;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds the engine may spend per move
    #[arg(long)]
    time_per_move: Option<u64>,

    /// Named search profile to load from the profiles directory
    #[arg(long)]
    profile: Option<String>,

    /// Side the engine plays: "top" or "bottom"
    #[arg(long, default_value = "top")]
    side: String,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Save the resolved search configuration under this profile name
    #[arg(long)]
    save_profile: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();
    panic::set_hook(Box::new(tracing_panic::panic_hook));

    let args = Args::parse();

    let profiles_dir = Path::new(config::PROFILES_DIR);
    let mut search_config = match &args.profile {
        Some(name) => match config::load_profile(profiles_dir, name) {
            Ok(profile) => profile,
            Err(e) => {
                error!("failed to load profile {name}: {e}");
                if let Ok(profiles) = config::get_profiles(profiles_dir) {
                    info!(?profiles, "available profiles");
                }
                process::exit(1);
            }
        },
        None => SearchConfig::default(),
    };
    if let Some(ms) = args.time_per_move {
        search_config.time_per_move_ms = ms;
    }
    if let Some(name) = &args.save_profile {
        if let Err(e) = config::save_profile(profiles_dir, name, &search_config) {
            error!("failed to save profile {name}: {e}");
            process::exit(1);
        }
        info!("saved profile {name}");
    }

    let engine_side = match args.side.as_str() {
        "top" => Side::Top,
        "bottom" => Side::Bottom,
        other => {
            error!("unknown side {other:?}, expected \"top\" or \"bottom\"");
            process::exit(1);
        }
    };

    let mut engine = EnginePlayer::new(engine_side, search_config);
    let mut random = RandomPlayer::new(engine_side.opponent(), args.seed);

    info!(side = ?engine_side, "engine plays one game against the random mover");

    let (outcome, state) = match engine_side {
        Side::Top => game::play_game(&mut engine, &mut random, Side::Top),
        Side::Bottom => game::play_game(&mut random, &mut engine, Side::Top),
    };

    info!(moves = state.move_log(), "game finished");
    info!(
        top = state.board.score_top(),
        bottom = state.board.score_bottom(),
        "final score"
    );
    match outcome {
        GameOutcome::Winner(side) if side == engine_side => info!("{}", engine.gloat()),
        GameOutcome::Winner(side) => info!(?side, "{}", random.gloat()),
        GameOutcome::Draw => info!("drawn game"),
    }
}
