use broadside::{init_logging, Console, Game};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Two-player Battleship played at one terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "Player 1", help = "Name shown for the first player")]
    player1: String,
    #[arg(long, default_value = "Player 2", help = "Name shown for the second player")]
    player2: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(cli.player1, cli.player2);
    let mut console = Console::stdio();
    console.run(&mut game, &mut rng)?;
    Ok(())
}
