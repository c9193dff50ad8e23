#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    init_logging, play_game, CliPlayer, Ending, GameConfig, GameSession, Player, SizeBounds,
    DEFAULT_SHIPS, MAX_SIZE, MIN_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Find the hidden ships on a square grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Grid size; asked interactively when omitted.
    #[arg(long)]
    size: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = MIN_SIZE)]
    min_size: usize,
    #[arg(long, default_value_t = MAX_SIZE)]
    max_size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let cli = Cli::parse();
    let bounds = SizeBounds::new(cli.min_size, cli.max_size);

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut player = CliPlayer::stdio();
    let mut out = std::io::stdout();
    println!("Welcome to Battleship!");

    loop {
        let config = match cli.size {
            Some(size) => GameConfig::new(size, cli.ships).with_bounds(bounds),
            None => match player.ask_config(&bounds, cli.ships) {
                Some(config) => config,
                None => break,
            },
        };
        let mut session = GameSession::new(config, &mut rng)?;

        match play_game(&mut session, &mut player, &mut rng, &mut out)? {
            Ending::Restart => continue,
            Ending::Quit => break,
            Ending::Won => {
                if player.confirm("Play again?") != Some(true) {
                    break;
                }
            }
        }
    }
    Ok(())
}
