//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {turn}: {} {}", step.word, step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);
}

/// Print a ranked pool after the given guesses
pub fn print_suggestions(result: &SuggestResult, top: usize) {
    if !result.history.is_empty() {
        println!("\n{}", "Guesses:".bright_cyan().bold());
        for guess in &result.history {
            println!("   {} {}", guess.word, guess.feedback.to_emoji());
        }
    }

    println!(
        "\n📋 {} candidates remaining",
        result.remaining.to_string().bright_yellow().bold()
    );
    if result.ranked.is_empty() {
        println!("{}", "   No word fits every guess.".red());
        return;
    }

    for (i, scored) in result.ranked.iter().take(top).enumerate() {
        println!(
            "   {:>3}. {} [{}] {:.3} bits",
            i + 1,
            scored.word.text().bright_white().bold(),
            entropy_bar(scored.score, result.remaining, 20).green(),
            scored.score
        );
    }
    if result.ranked.len() > top {
        println!("   … and {} more", result.ranked.len() - top);
    }
}

/// Print the words matching a lookup pattern
pub fn print_lookup(pattern: &str, matches: &[Word]) {
    println!(
        "\n🔍 {} matches for {}",
        matches.len().to_string().bright_yellow().bold(),
        pattern.bright_cyan()
    );
    for row in matches.chunks(8) {
        let line: Vec<&str> = row.iter().map(Word::text).collect();
        println!("   {}", line.join("  "));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n{} {}",
            "❌ Failed:".red().bold(),
            result.failed_words.join(", ")
        );
    }
}
