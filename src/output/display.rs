//! Display functions for the line-mode game and command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, gallows_lines};
use crate::commands::SimulationResult;
use crate::core::{Difficulty, KeyState, MAX_INCORRECT_GUESSES, blanks};
use crate::session::{GuessOutcome, MachineState, SessionSnapshot, Statistics};
use crate::wordlists::Corpus;
use colored::Colorize;

/// Print the difficulty menu shown at the start screen
pub fn print_tier_menu(corpus: &Corpus) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "🎯 HANGMAN - Select Difficulty".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, (difficulty, size)) in corpus.tier_sizes().iter().enumerate() {
        let name = match difficulty {
            Difficulty::Easy => difficulty.name().green(),
            Difficulty::Medium => difficulty.name().yellow(),
            Difficulty::Hard => difficulty.name().red(),
        };
        println!(
            "  {}. {:<8} {:<12} {}",
            i + 1,
            name.bold(),
            difficulty.description(),
            format!("({size} words)").bright_black()
        );
    }
    println!();
}

/// Print the figure, the letter blanks and the keyboard for a round
pub fn print_snapshot(snapshot: &SessionSnapshot) {
    println!();
    for line in gallows_lines(snapshot.visible_parts()) {
        println!("    {line}");
    }

    let word = blanks(&snapshot.reveal());
    let word = if snapshot.machine_state == MachineState::Lost {
        word.red().bold()
    } else {
        word.bright_white().bold()
    };
    println!("\n    {word}\n");

    for row in KEYBOARD_ROWS {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| {
                let key = (letter as char).to_string();
                match snapshot.key_state(letter) {
                    KeyState::Available => key.white().to_string(),
                    KeyState::Correct => key.green().bold().to_string(),
                    KeyState::Incorrect => key.red().strikethrough().to_string(),
                    KeyState::Locked => key.bright_black().to_string(),
                }
            })
            .collect();
        println!("    {}", keys.join(" "));
    }

    let misses = snapshot.incorrect_count();
    println!(
        "\n    Misses: [{}] {misses}/{MAX_INCORRECT_GUESSES}",
        create_progress_bar(misses as f64, MAX_INCORRECT_GUESSES as f64, 12).red()
    );
}

/// Print feedback for a single guess
pub fn print_guess_outcome(outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Correct {
            letter,
            occurrences,
        } => println!(
            "{}",
            format!(
                "✓ {letter} appears {occurrences} {}",
                if occurrences == 1 { "time" } else { "times" }
            )
            .green()
        ),
        GuessOutcome::Incorrect { letter, remaining } => println!(
            "{}",
            format!("✗ No {letter} - {remaining} misses left").red()
        ),
        GuessOutcome::AlreadyGuessed(letter) => {
            println!("{}", format!("You already guessed {letter}").yellow());
        }
        GuessOutcome::NotALetter(c) => {
            println!("{}", format!("'{c}' is not a letter").yellow());
        }
        GuessOutcome::RoundOver => println!("{}", "The round is over".yellow()),
        GuessOutcome::NoActiveRound => println!("{}", "Pick a difficulty first".yellow()),
    }
}

/// Print the end-of-round banner
pub fn print_round_result(snapshot: &SessionSnapshot, stats: Statistics) {
    let word = snapshot
        .target_word
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match snapshot.machine_state {
        MachineState::Won => println!(
            "{}",
            format!("    🎉 You Got It! The word was {word}").bright_green().bold()
        ),
        MachineState::Lost => println!(
            "{}",
            format!("    💀 Nice Try! The word was {word}").red().bold()
        ),
        MachineState::Start | MachineState::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "  Games: {} | Won: {} | Lost: {} | Win Rate: {:.0}%\n",
        stats.played,
        stats.won.to_string().green(),
        stats.lost.to_string().red(),
        stats.win_rate()
    );
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for tier in &result.tiers {
        println!(
            "\n📊 {} ({})",
            tier.difficulty.name().bright_cyan().bold(),
            tier.difficulty.description()
        );
        println!("   Rounds:           {}", tier.rounds);
        println!(
            "   Win rate:         {}",
            format!("{:.1}%", tier.win_rate()).bright_yellow().bold()
        );
        println!("   Average misses:   {:.2}", tier.average_incorrect);

        println!("   Misses distribution:");
        for (misses, &count) in tier.incorrect_distribution.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = count as f64 / tier.rounds as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            let bar = if misses == MAX_INCORRECT_GUESSES {
                bar.red()
            } else {
                bar.green()
            };
            println!("     {misses}: {bar} {count:5} ({pct:5.1}%)");
        }

        if !tier.hardest_words.is_empty() {
            let words: Vec<String> = tier
                .hardest_words
                .iter()
                .map(|(word, count)| format!("{word} ×{count}"))
                .collect();
            println!("   Hardest words:    {}", words.join(", ").bright_black());
        }
    }

    println!(
        "\n   Rounds: {} | Time: {:.2}s | Rounds/second: {:.1}",
        result.total_rounds,
        result.duration.as_secs_f64(),
        result.rounds_per_second
    );
}
