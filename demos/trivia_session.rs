//! Trivia Session
//!
//! This example plays the builtin bank in the terminal.
//!
//! Key concepts:
//! - The host renders purely from engine queries
//! - User input is forwarded as engine commands
//! - Rejected commands are shown as messages, never crash the session
//!
//! Commands: `1`-`4` select an option, `c` confirms, `n` moves on,
//! `r` restarts a finished quiz, `q` quits.
//!
//! Optionally pass a JSON config path as the first argument, and set
//! `RUST_LOG=debug` to watch the transitions.
//!
//! Run with: cargo run --example trivia_session

use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use trivia_engine::core::Phase;
use trivia_engine::{builtin_bank, QuizConfig, QuizEngine};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn render(engine: &QuizEngine) {
    match engine.phase() {
        Phase::Finished => {
            if let Ok(summary) = engine.summary() {
                println!("\n=== Final Result ===");
                println!("Score: {} / {}", summary.score, summary.total);
                println!("Percentage: {}%", summary.percentage);
                println!("Tier: {:?}", summary.tier);
                println!("Lives left: {}", summary.lives_remaining);
                if let Some(elapsed) = summary.elapsed {
                    println!("Time: {}s", elapsed.as_secs());
                }
                println!("[r] restart  [q] quit");
            }
        }
        phase => {
            let question = engine.current_question();
            println!(
                "\nQuestion {} of {}  ({:.0}%)  lives: {}",
                engine.question_index() + 1,
                engine.bank().len(),
                engine.progress_fraction() * 100.0,
                engine.lives_remaining()
            );
            println!("{}", question.text());

            let feedback = engine.feedback().ok();
            for (i, option) in question.options().iter().enumerate() {
                let marker = match feedback {
                    Some(f) if i == f.correct_index => "+",
                    Some(f) if f.is_wrong_pick(i) => "x",
                    _ if engine.selected_answer() == Some(i) => ">",
                    _ => " ",
                };
                println!(" {} {}. {}", marker, i + 1, option);
            }

            if let Some(feedback) = feedback {
                println!("{}", if feedback.correct { "Correct" } else { "Incorrect" });
                let next = if engine.is_last_question() || engine.lives_remaining() == 0 {
                    "see results"
                } else {
                    "next"
                };
                println!("[n] {}", next);
            } else if phase == Phase::Answering && engine.can_confirm() {
                println!("[c] confirm");
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::default(),
    };
    let mut engine = QuizEngine::with_config(builtin_bank(), config)?;

    render(&engine);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let result = match input {
            "q" => break,
            "c" => engine.confirm(),
            "n" => engine.advance(),
            "r" => engine.restart(),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => engine.select_option(n - 1),
                _ => {
                    println!("Unknown command '{}'", other);
                    continue;
                }
            },
        };

        if let Err(err) = result {
            println!("! {}", err);
        }
        render(&engine);
        io::stdout().flush()?;
    }

    Ok(())
}
