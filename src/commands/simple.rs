//! Simple interactive CLI mode
//!
//! Text-based solver: the user reports what the game answered and gets a
//! ranked pool back.

use crate::core::{Feedback, Guess, Word};
use crate::output::formatters::entropy_bar;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Session, SessionConfig};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Suggestions shown per turn
const SHOWN_SUGGESTIONS: usize = 5;

/// What the user asked for on one line
#[derive(Debug, PartialEq)]
enum Entry {
    Quit,
    NewGame,
    Undo,
    Played(Guess),
    Invalid(String),
}

/// Run the simple interactive solver over `input` and `output`
///
/// Each line is either `WORD FEEDBACK` (or `WORD:FEEDBACK`), a bare
/// `FEEDBACK` for the suggested word, `win`, or one of the commands
/// `undo`, `new`, `quit`. End of input quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_simple<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    config: SessionConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║               Wordle Engine - Interactive Solver             ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Enter each guess with the feedback the game gave:\n")?;
    writeln!(output, "  - G/g/🟩 for green (correct position)")?;
    writeln!(output, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(output, "  - -/_/⬜ for gray (not in word)\n")?;
    writeln!(output, "  e.g. 'trace -GGYG', or just '-GGYG' to score the suggestion.")?;
    writeln!(output, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    let mut session = Session::with_config(dictionary, config);

    loop {
        let turn = session.history().len() + 1;
        let candidates = session.candidates();

        if candidates.is_empty() {
            writeln!(
                output,
                "\n{}",
                "❌ No candidates remain! Some feedback may be wrong.".red()
            )?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.\n")?;
        }

        let suggestions = session.suggestions();
        let best = session.first_unplayed(&suggestions).cloned();

        if let Some(best) = &best {
            writeln!(output, "────────────────────────────────────────────────────────────")?;
            writeln!(output, "Turn {turn}: {} candidates remaining", candidates.len())?;
            writeln!(output, "────────────────────────────────────────────────────────────")?;

            let metrics = calculate_metrics(&best.word, candidates);
            writeln!(
                output,
                "\n📊 Suggested guess: {}",
                best.word.text().bright_yellow().bold()
            )?;
            writeln!(
                output,
                "   Entropy:          [{}] {:.3} bits",
                entropy_bar(metrics.entropy, candidates.len(), 20).green(),
                metrics.entropy
            )?;
            writeln!(
                output,
                "   Expected remain:  {:.1} candidates",
                metrics.expected_remaining
            )?;
            writeln!(output, "   Worst case:       {} candidates\n", metrics.max_partition)?;

            if suggestions.len() > 1 {
                writeln!(output, "Top picks:")?;
                for scored in suggestions.iter().take(SHOWN_SUGGESTIONS) {
                    writeln!(output, "  • {scored}")?;
                }
                writeln!(output)?;
            }
        }

        let Some(line) = read_line(input, output, "Guess and feedback")? else {
            return Ok(());
        };

        let suggested = best.as_ref().map(|b| &b.word);
        match parse_entry(&line, suggested) {
            Entry::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Entry::NewGame => {
                session.reset();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            Entry::Undo => {
                if let Some(undone) = session.undo() {
                    writeln!(
                        output,
                        "✓ Undone {undone}! Back to turn {}\n",
                        session.history().len() + 1
                    )?;
                } else {
                    writeln!(output, "Nothing to undo!\n")?;
                }
            }
            Entry::Invalid(reason) => {
                writeln!(output, "{} {reason}\n", "❌ Invalid entry:".red())?;
            }
            Entry::Played(guess) => {
                session.apply(guess);
                if session.is_solved() {
                    print_victory(&session, output)?;
                    let again = read_line(input, output, "Play again? (yes/no)")?;
                    if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                        session.reset();
                        writeln!(output, "\n🔄 New game started!\n")?;
                    } else {
                        writeln!(output, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn parse_entry(line: &str, suggested: Option<&Word>) -> Entry {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Entry::Quit,
        "new" | "n" => return Entry::NewGame,
        "undo" | "u" => return Entry::Undo,
        "win" | "correct" | "solved" => {
            return suggested.map_or_else(
                || Entry::Invalid("no suggestion to mark as solved".to_string()),
                |word| Entry::Played(Guess::new(word.clone(), Feedback::PERFECT)),
            );
        }
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ':' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (word, feedback) = match parts.as_slice() {
        [feedback] => match suggested {
            Some(word) => (word.clone(), *feedback),
            None => return Entry::Invalid("enter both the word and its feedback".to_string()),
        },
        [word, feedback] => match Word::new(word) {
            Ok(word) => (word, *feedback),
            Err(e) => return Entry::Invalid(format!("{word:?}: {e}")),
        },
        _ => return Entry::Invalid("expected WORD FEEDBACK".to_string()),
    };

    match feedback.parse::<Feedback>() {
        Ok(feedback) => Entry::Played(Guess::new(word, feedback)),
        Err(e) => Entry::Invalid(format!("{feedback:?}: {e}")),
    }
}

fn print_victory<W: Write>(session: &Session<'_>, output: &mut W) -> Result<()> {
    let turns = session.history().len();

    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        "        🎉  W O R D L E   S O L V E D !  🎉        "
            .bright_green()
            .bold()
    )?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;

    let plural = if turns == 1 { "guess" } else { "guesses" };
    writeln!(output, "\n  {}", format!("Solved in {turns} {plural}").bright_cyan().bold())?;

    writeln!(output, "\n  Guess history:")?;
    for (i, guess) in session.history().iter().enumerate() {
        writeln!(
            output,
            "    {}. {} {}",
            i + 1,
            guess.word.text().bright_white().bold(),
            guess.feedback.to_emoji()
        )?;
    }
    writeln!(output)?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["CRANE", "TRACE", "SLATE", "BRAVE"])
    }

    fn run(script: &str) -> String {
        let dict = dictionary();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_simple(&dict, SessionConfig::default(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn end_of_input_quits() {
        let out = run("");
        assert!(out.contains("Turn 1: 4 candidates remaining"));
    }

    #[test]
    fn guess_then_win() {
        let out = run("TRACE -GGYG\nwin\nno\n");
        assert!(out.contains("Turn 2: 1 candidates remaining"));
        assert!(out.contains("Solved in 2 guesses"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn colon_separated_entry() {
        let out = run("trace:-GGYG\nquit\n");
        assert!(out.contains("Turn 2: 1 candidates remaining"));
    }

    #[test]
    fn undo_restores_pool() {
        let out = run("TRACE -GGYG\nundo\nquit\n");
        assert!(out.contains("Undone TRACE -GGYG"));
        assert_eq!(out.matches("Turn 1: 4 candidates remaining").count(), 2);
    }

    #[test]
    fn invalid_feedback_is_reported() {
        let out = run("TRACE -GGXG\nquit\n");
        assert!(out.contains("Invalid entry"));
        assert!(!out.contains("Turn 2"));
    }

    #[test]
    fn contradictory_feedback_empties_pool() {
        let out = run("CRANE GGGG-\nundo\nquit\n");
        assert!(out.contains("No candidates remain"));
        assert!(out.contains("Undone CRANE GGGG-"));
    }

    #[test]
    fn play_again_resets() {
        let out = run("TRACE -GGYG\nwin\nyes\nquit\n");
        assert!(out.contains("New game started"));
        assert_eq!(out.matches("Turn 1: 4 candidates remaining").count(), 2);
    }

    #[test]
    fn parse_entry_commands() {
        assert_eq!(parse_entry("QUIT", None), Entry::Quit);
        assert_eq!(parse_entry("n", None), Entry::NewGame);
        assert_eq!(parse_entry("undo", None), Entry::Undo);
        assert!(matches!(parse_entry("win", None), Entry::Invalid(_)));
    }

    #[test]
    fn bare_feedback_scores_suggestion() {
        let suggested = Word::new("SLATE").unwrap();
        let Entry::Played(guess) = parse_entry("--GGG", Some(&suggested)) else {
            panic!("expected a played guess");
        };
        assert_eq!(guess.word, suggested);
        assert_eq!(guess.to_string(), "SLATE --GGG");
    }
}
