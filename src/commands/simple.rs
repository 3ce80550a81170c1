//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::Difficulty;
use crate::output::{print_guess_outcome, print_round_result, print_snapshot, print_tier_menu};
use crate::session::{GameSession, MachineState};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// If `difficulty` is given the start screen is skipped.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(
    session: &mut GameSession<'_, R>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, difficulty, &mut stdin.lock())
}

/// Run the line-mode game loop against any line source
///
/// Returns when the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: Rng, I: BufRead>(
    session: &mut GameSession<'_, R>,
    difficulty: Option<Difficulty>,
    input: &mut I,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Hangman - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time. Six misses and you lose.");
    println!("Commands: 'menu' to pick another difficulty, 'quit' to exit\n");

    if let Some(difficulty) = difficulty {
        session.start_game(difficulty)?;
    }

    loop {
        match session.machine_state() {
            MachineState::Start => {
                print_tier_menu(session.corpus());
                let Some(choice) = get_user_input(input, "Difficulty (1-3 or name)")? else {
                    return Ok(());
                };
                if is_quit(&choice) {
                    break;
                }
                match parse_tier_choice(&choice) {
                    Some(difficulty) => {
                        session.start_game(difficulty)?;
                    }
                    None => println!("❌ Unknown difficulty '{choice}'\n"),
                }
            }
            MachineState::Playing => {
                print_snapshot(&session.snapshot());
                let Some(line) = get_user_input(input, "\nGuess a letter")? else {
                    return Ok(());
                };
                if is_quit(&line) {
                    break;
                }
                if line.eq_ignore_ascii_case("menu") {
                    session.return_to_start();
                    continue;
                }
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => print_guess_outcome(session.guess(letter)),
                    _ => println!("❌ Enter a single letter"),
                }
            }
            MachineState::Won | MachineState::Lost => {
                let snapshot = session.snapshot();
                print_snapshot(&snapshot);
                print_round_result(&snapshot, session.statistics());

                let Some(answer) = get_user_input(input, "Play again? (yes/menu/quit)")? else {
                    return Ok(());
                };
                if is_quit(&answer) || is_no(&answer) {
                    break;
                }
                match answer.to_lowercase().as_str() {
                    "yes" | "y" | "" => {
                        session.restart()?;
                        println!("\n🔄 New round started!\n");
                    }
                    "menu" | "m" => {
                        session.return_to_start();
                    }
                    _ => println!("❌ Unknown answer '{answer}'"),
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

fn is_no(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "no" | "n")
}

fn parse_tier_choice(choice: &str) -> Option<Difficulty> {
    match choice {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        other => other.parse().ok(),
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(script: &str, difficulty: Option<Difficulty>) -> crate::session::Statistics {
        let corpus = Corpus::new(words_from_slice(&["cat", "garden"])).unwrap();
        let mut session = GameSession::with_rng(&corpus, StdRng::seed_from_u64(0));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        run_simple_with(&mut session, difficulty, &mut input).unwrap();
        session.statistics()
    }

    #[test]
    fn plays_a_winning_round_from_the_menu() {
        let stats = play("3\nc\na\nt\nquit\n", None);
        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
    }

    #[test]
    fn skips_menu_when_difficulty_given() {
        let stats = play("q\nw\ne\nr\ny\nu\nquit\n", Some(Difficulty::Hard));
        assert_eq!(stats.played, 1);
        assert_eq!(stats.lost, 1);
    }

    #[test]
    fn ignores_bad_input_and_stops_at_eof() {
        let stats = play("expert\n2\nxyz\n7\n", None);
        assert_eq!(stats.played, 0);
    }

    #[test]
    fn play_again_restarts_same_tier() {
        let stats = play("c\na\nt\nyes\nc\na\nt\nno\n", Some(Difficulty::Hard));
        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 2);
    }

    #[test]
    fn unknown_play_again_answer_asks_again() {
        let stats = play("c\na\nt\nyse\nyes\nc\na\nt\nquit\n", Some(Difficulty::Hard));
        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 2);
    }

    #[test]
    fn n_declines_another_round() {
        let stats = play("c\na\nt\nn\nyes\nc\na\nt\n", Some(Difficulty::Hard));
        assert_eq!(stats.played, 1);
    }

    #[test]
    fn tier_choice_parsing() {
        assert_eq!(parse_tier_choice("1"), Some(Difficulty::Easy));
        assert_eq!(parse_tier_choice("medium"), Some(Difficulty::Medium));
        assert_eq!(parse_tier_choice("4"), None);
    }
}
