//! Play connect four between two bots from the command line.
//!
//! - `c4 play` - Play a single game and print the final board
//! - `c4 match --games 20` - Play a match and report the score of the first bot

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use connect_four::ai::hybrid::HybridBot;
use connect_four::ai::simple::{MonteCarloBot, RandomBot};
use connect_four::ai::{Bot, DEFAULT_DEPTH, DEFAULT_ROLLOUTS};
use connect_four::board::{Board, Outcome};
use connect_four::game::Game;
use connect_four::util::bot_game;

/// Connect four between two bots
#[derive(Parser)]
#[command(name = "c4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and print the final board
    Play,
    /// Play a number of games, switching sides every game, and report the result of the first bot
    Match {
        /// Number of games per side
        #[arg(long, default_value_t = 10)]
        games: u32,
    },
}

#[derive(Args, Debug)]
struct Settings {
    #[arg(long, default_value_t = Board::DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = Board::DEFAULT_HEIGHT)]
    height: usize,

    /// Bot playing first (player A)
    #[arg(long, value_enum, default_value_t = BotKind::Hybrid)]
    first: BotKind,
    /// Bot playing second (player B)
    #[arg(long, value_enum, default_value_t = BotKind::MonteCarlo)]
    second: BotKind,

    /// Total rollouts per decision, split over the legal moves
    #[arg(long, default_value_t = DEFAULT_ROLLOUTS)]
    rollouts: u64,
    /// Forced win search depth of the hybrid bot
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Number of worker threads, defaults to the number of cpus
    #[arg(long)]
    threads: Option<usize>,

    /// Log level, overridden by `RUST_LOG`
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum BotKind {
    Random,
    MonteCarlo,
    Hybrid,
}

impl BotKind {
    fn build(self, settings: &Settings) -> Box<dyn Bot> {
        match self {
            BotKind::Random => Box::new(RandomBot::new(rand::thread_rng())),
            BotKind::MonteCarlo => Box::new(MonteCarloBot::new(settings.rollouts)),
            BotKind::Hybrid => Box::new(HybridBot::new(settings.rollouts, settings.depth)),
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = &cli.settings;

    init_tracing(&settings.log_level);

    let threads = settings.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;
    info!(?settings, threads, "starting");

    anyhow::ensure!(
        settings.width > 0 && settings.height > 0,
        "board must be non-empty, got {}x{}",
        settings.width,
        settings.height
    );

    match cli.command {
        Some(Commands::Play) | None => play(settings),
        Some(Commands::Match { games }) => play_match(settings, games),
    }
}

fn play(settings: &Settings) -> Result<()> {
    let board = Board::new(settings.width, settings.height);
    let mut game = Game::new(board, settings.first.build(settings), settings.second.build(settings));

    let outcome = game.play_out()?;

    println!("{}", game.board());
    match outcome {
        Outcome::WonBy(player) => println!("THE WINNER IS: {}", player.to_char()),
        Outcome::Draw => println!("DRAW"),
    }

    Ok(())
}

fn play_match(settings: &Settings, games: u32) -> Result<()> {
    let result = bot_game::run(
        || Board::new(settings.width, settings.height),
        || settings.first.build(settings),
        || settings.second.build(settings),
        games,
        true,
        |wdl, replay| info!(?wdl, outcome = ?replay.outcome, moves = replay.moves.len(), "game finished"),
    )?;

    println!("{:?}", result);
    Ok(())
}
