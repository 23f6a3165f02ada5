//! Play mode
//!
//! The user guesses a hidden word; each row comes back colored.

use crate::core::{Feedback, Word};
use crate::game::{Game, GameConfig, GameStatus};
use crate::output::formatters::{colored_row, letter_tile};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Pick the hidden word
///
/// An explicit `target` wins; otherwise a dictionary word is drawn at
/// random, reproducibly when `seed` is given.
///
/// # Errors
///
/// Returns an error if `target` is malformed or unknown, or if the
/// dictionary is empty.
pub fn choose_target(dictionary: &Dictionary, target: Option<&str>, seed: Option<u64>) -> Result<Word> {
    if let Some(target) = target {
        let word = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;
        if !dictionary.contains(&word) {
            bail!("target {word} is not in the word list");
        }
        return Ok(word);
    }

    let words = dictionary.words();
    let chosen = match seed {
        Some(seed) => words.choose(&mut StdRng::seed_from_u64(seed)),
        None => words.choose(&mut rand::rng()),
    };
    chosen
        .cloned()
        .context("cannot pick a target from an empty word list")
}

/// Run one game of play mode over `input` and `output`
///
/// Returns the final status; end of input leaves the game `Playing`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Rejected
/// guesses are reported and do not use up a row.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    target: Word,
    config: GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus> {
    let mut game = Game::new(target, config);

    writeln!(output, "\nGuess the five-letter word!")?;
    writeln!(output, "You have {} tries. Type 'quit' to give up.\n", config.max_guesses)?;

    while !game.is_over() {
        write!(output, "Guess {}/{}: ", game.current_row() + 1, config.max_guesses)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(game.status());
        }
        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(output, "\n👋 Bye!")?;
            return Ok(game.status());
        }

        match game.submit(line, dictionary) {
            Ok(_) => print_board(&game, output)?,
            Err(e) => writeln!(output, "❌ {e}")?,
        }
    }

    match (game.status(), game.target()) {
        (GameStatus::Won, _) => {
            let turns = game.guesses().len();
            writeln!(output, "\n🎉 Got it in {turns}!")?;
        }
        (_, Some(target)) => writeln!(output, "\nThe word was {target}.")?,
        (_, None) => {}
    }

    Ok(game.status())
}

fn print_board<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    writeln!(output)?;
    for (letters, feedback) in game.rows() {
        if feedback == Feedback::EMPTY {
            writeln!(output, "  {}", " _ ".repeat(letters.len()))?;
        } else {
            writeln!(output, "  {}", colored_row(&letters, &feedback))?;
        }
    }

    let keys: String = game
        .keyboard()
        .iter()
        .map(|(&letter, &state)| letter_tile(letter, state).to_string())
        .collect();
    writeln!(output, "\n  {keys}\n")?;
    Ok(())
}
