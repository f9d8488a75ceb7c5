//! Mastermind - CLI
//!
//! Play in an interactive terminal UI (default) or a plain line console.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::Console,
    core::Alphabet,
    game::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig},
    interactive::{App, run_tui},
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden code with exact and close feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode; when omitted the mode menu is shown
    #[arg(short, long, global = true, value_enum)]
    mode: Option<Alphabet>,

    /// Number of symbols in the secret code
    #[arg(short, long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible secret codes
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based console mode
    Console,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(cli.length, cli.attempts, cli.mode.unwrap_or_default());
    config.validate()?;

    let rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "Using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.mode, rng),
        Commands::Console => run_console_command(config, cli.mode, rng),
    }
}

fn run_play_command(config: GameConfig, mode: Option<Alphabet>, rng: StdRng) -> Result<()> {
    info!(?mode, "Starting interactive mode");
    let mut app = App::new(config, rng);
    if let Some(alphabet) = mode {
        app.start_game(alphabet)?;
    }
    run_tui(app)
}

fn run_console_command(config: GameConfig, mode: Option<Alphabet>, rng: StdRng) -> Result<()> {
    info!(?mode, "Starting console mode");
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), rng);
    console.run(config, mode)
}
