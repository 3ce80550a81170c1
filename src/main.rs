//! Hangman - CLI
//!
//! Hangman with a TUI, a line mode and a batch simulator for tuning tiers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, run_simulation},
    core::Difficulty,
    output::print_simulation_result,
    session::GameSession,
    wordlists::{Corpus, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with difficulty tiers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Difficulty: easy (9+ letters), medium (6-8), hard (3-5). Skips the start screen
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play automated rounds to measure how hard each tier is
    Simulate {
        /// Number of rounds per tier
        #[arg(short = 'n', long, default_value = "500")]
        rounds: usize,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the word corpus based on the -w flag
///
/// Fails fast if the list has no usable words.
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    let corpus = match wordlist {
        "builtin" => Corpus::builtin()?,
        path => {
            let words =
                load_from_file(path).with_context(|| format!("failed to read word list {path}"))?;
            Corpus::new(words).with_context(|| format!("word list {path} is unusable"))?
        }
    };

    for (difficulty, size) in corpus.tier_sizes() {
        if size == 0 {
            log::warn!("No {difficulty} words in corpus; {difficulty} games use any word");
        }
    }
    log::info!("Corpus ready: {} words", corpus.len());
    Ok(corpus)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, cli.difficulty),
        Commands::Simple => {
            let mut session = GameSession::new(&corpus);
            run_simple(&mut session, cli.difficulty)
        }
        Commands::Simulate { rounds, seed } => {
            run_simulate_command(&corpus, cli.difficulty, rounds, seed)
        }
    }
}

fn run_play_command(corpus: &Corpus, difficulty: Option<Difficulty>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let mut app = App::new(GameSession::new(corpus));
    if let Some(difficulty) = difficulty {
        app.start_game(difficulty);
    }
    run_tui(app)
}

fn run_simulate_command(
    corpus: &Corpus,
    difficulty: Option<Difficulty>,
    rounds: usize,
    seed: Option<u64>,
) -> Result<()> {
    let tiers: Vec<Difficulty> = difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);

    println!(
        "Simulating {rounds} rounds per tier across {} tier(s)...",
        tiers.len()
    );
    let result = run_simulation(corpus, &tiers, rounds, seed, true)?;
    print_simulation_result(&result);
    Ok(())
}
