//! Plays one seeded game with a random bot and prints a JSON summary.

use battleship_solo::{
    init_logging, play_game, GameConfig, GameSession, RandomPlayer, DEFAULT_SHIPS, DEFAULT_SIZE,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Auto-play a seeded game")]
struct Args {
    seed: u64,
    #[arg(default_value_t = DEFAULT_SIZE)]
    size: usize,
    #[arg(default_value_t = DEFAULT_SHIPS)]
    ships: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Error);
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut session = GameSession::new(GameConfig::new(args.size, args.ships), &mut rng)?;
    let mut bot = RandomPlayer::new();
    let ending = play_game(&mut session, &mut bot, &mut rng, &mut std::io::sink())?;

    let progress = session.progress();
    let result = json!({
        "size": args.size,
        "ships": progress.ship_count,
        "shots": progress.shots,
        "hits": progress.hits,
        "status": progress.status,
        "ending": ending,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
