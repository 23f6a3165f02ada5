//! Wordle Engine - CLI
//!
//! Play Wordle in the terminal, or let the entropy ranker help you solve one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_engine::{
    commands::{
        SolveConfig, analyze_word, choose_target, run_benchmark, run_play, run_simple,
        solve_word, suggest,
    },
    game::{GameConfig, MAX_GUESSES},
    lookup::lookup,
    output::{
        print_analysis_result, print_benchmark_result, print_lookup, print_solve_result,
        print_suggestions,
    },
    solver::SessionConfig,
    wordlists::{Dictionary, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle feedback evaluation, candidate filtering and entropy ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    wordlist: PathBuf,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Rank pools larger than this on all cores
    #[arg(long, global = true, default_value = "200")]
    parallel_threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a hidden word (default)
    Play {
        /// Use this word instead of a random one
        #[arg(short, long)]
        target: Option<String>,

        /// Seed for picking the random word
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Interactive solver: enter guesses and feedback, get suggestions
    Simple,

    /// Solve a specific target word (-v adds per-turn detail)
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank the candidates left after some guesses
    Rank {
        /// Number of suggestions to show
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// A played guess as WORD:FEEDBACK, e.g. trace:-GGYG (repeatable)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,
    },

    /// Search the word list with a regular expression
    Lookup {
        /// Case-insensitive pattern; empty matches every word
        #[arg(default_value = "")]
        pattern: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)
        .with_context(|| format!("loading {}", cli.wordlist.display()))?;
    let session_config = SessionConfig {
        parallel_threshold: cli.parallel_threshold,
    };

    let command = cli.command.unwrap_or(Commands::Play {
        target: None,
        seed: None,
    });

    match command {
        Commands::Play { target, seed } => run_play_command(&dictionary, target.as_deref(), seed),
        Commands::Simple => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            run_simple(&dictionary, session_config, &mut input, &mut output)
        }
        Commands::Solve { word, max_guesses } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = max_guesses;
            let result = solve_word(config, &dictionary, session_config)?;
            print_solve_result(&result, cli.verbose > 0);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, dictionary.words())?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Rank { top, guesses } => {
            let result = suggest(&dictionary, &guesses, session_config)?;
            print_suggestions(&result, top);
            Ok(())
        }
        Commands::Lookup { pattern } => {
            let matches = lookup(&pattern, &dictionary);
            print_lookup(&pattern, &matches);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} words...");
            let result = run_benchmark(&dictionary, count, MAX_GUESSES, session_config, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, target: Option<&str>, seed: Option<u64>) -> Result<()> {
    let target = choose_target(dictionary, target, seed)?;
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let status = run_play(dictionary, target, GameConfig::default(), &mut input, &mut output)?;
    log::info!("game finished: {status:?}");
    Ok(())
}
