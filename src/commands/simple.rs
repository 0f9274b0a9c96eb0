//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Drives the same [`Session`]
//! state machine the TUI uses, one prompt per screen.

use std::io::{self, Write};

use colored::Colorize;

use crate::catalog::{Catalog, Industry};
use crate::core::{MAX_ATTEMPTS, Submission};
use crate::output::{
    print_daily_locked, print_round_result, print_share_links,
};
use crate::session::{Mode, Screen, Session};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(catalog: Catalog) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              🎬 Emoji Movie Guessing 🎬                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the movie from its emoji clue. Wrong guesses reveal hints.");
    println!("Commands work anywhere: 'quit' exits, 'back' goes one screen up.\n");

    let mut session = Session::new(catalog);

    loop {
        match session.screen() {
            Screen::Home => {
                if !prompt_industry(&mut session)? {
                    break;
                }
            }
            Screen::ModeSelect => {
                if !prompt_mode(&mut session)? {
                    break;
                }
            }
            Screen::Playing => {
                if !prompt_guess(&mut session)? {
                    break;
                }
            }
            Screen::Result => {
                if !prompt_result(&mut session)? {
                    break;
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Home screen: pick an industry. Returns `false` to quit.
fn prompt_industry(session: &mut Session) -> Result<bool, String> {
    println!("{}", "🧩 Choose a Film Industry".bright_cyan().bold());
    for (i, industry) in Industry::ALL.iter().enumerate() {
        println!("  {}. {} {}", i + 1, industry.badge(), industry.name());
    }

    loop {
        let input = get_user_input("Industry (1-4 or name)")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "back" | "b" => {
                println!("Already at the home screen.\n");
                continue;
            }
            _ => {}
        }

        let choice = input
            .parse::<usize>()
            .ok()
            .and_then(|n| Industry::ALL.get(n.wrapping_sub(1)).copied())
            .or_else(|| Industry::from_name(&input));

        if let Some(industry) = choice {
            session.select_industry(industry);
            return Ok(true);
        }
        println!("❌ Unknown industry. Pick 1-4 or type a name.\n");
    }
}

/// Mode-select screen: daily or infinite. Returns `false` to quit.
fn prompt_mode(session: &mut Session) -> Result<bool, String> {
    let Some(industry) = session.industry() else {
        session.go_home();
        return Ok(true);
    };

    println!(
        "\n🎞️ {} {} — Select a Mode",
        industry.badge(),
        industry.name().bright_yellow().bold()
    );
    if session.daily_completed(industry) {
        println!("  d. 📆 Daily Challenge {}", "(completed ✅)".bright_black());
    } else {
        println!("  d. 📆 Daily Challenge — one round, same for the session");
    }
    println!("  i. ♾️ Infinite Mode — unlimited rounds, one after another");

    loop {
        let input = get_user_input("Mode (d/i)")?.to_lowercase();

        let mode = match input.as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "back" | "b" => {
                session.back();
                println!();
                return Ok(true);
            }
            "d" | "daily" => Mode::Daily,
            "i" | "infinite" => Mode::Infinite,
            _ => {
                println!("❌ Pick 'd' for daily or 'i' for infinite.\n");
                continue;
            }
        };

        if session.select_mode(mode) {
            return Ok(true);
        }
        print_daily_locked(industry);
        println!();
    }
}

/// Playing screen: one prompt per guess. Returns `false` to quit.
fn prompt_guess(session: &mut Session) -> Result<bool, String> {
    {
        let Some(round) = session.round() else {
            session.go_home();
            return Ok(true);
        };

        println!("\n{}", "─".repeat(60));
        println!(
            "Attempt {} of {MAX_ATTEMPTS} · {}s elapsed",
            round.attempt().to_string().bright_cyan().bold(),
            round.elapsed_seconds()
        );
        println!("\n  🧩 Clue: {}", round.movie().emojis());

        if round.all_hints_exposed() {
            println!("\n  💡 All hints:");
            for (i, hint) in round.movie().hints().iter().enumerate() {
                println!("     {}. {hint}", i + 1);
            }
        } else if let Some((index, hint)) = round.current_hint() {
            println!("\n  💡 Hint {}: {}", index + 1, hint.bright_yellow());
        }

        if !round.guesses().is_empty() {
            println!("\n  Previous guesses:");
            for guess in round.guesses() {
                println!("    • {guess}");
            }
        }
        println!();
    }

    loop {
        let input = get_user_input("Your guess ('skip' to give up)")?;

        match input.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(false),
            "back" => {
                session.back();
                return Ok(true);
            }
            "skip" => {
                session.skip();
                return Ok(true);
            }
            "" => {
                println!("❌ Type a guess first.\n");
                continue;
            }
            _ => {}
        }

        return match session.submit_guess(&input) {
            Submission::Wrong { close: true } => {
                println!("{}", "\n🔥 So close! Not quite the title.".bright_yellow());
                Ok(true)
            }
            Submission::Wrong { close: false } => {
                println!("\n❌ Not it — here comes a hint.");
                Ok(true)
            }
            Submission::Won | Submission::Lost | Submission::Ignored => Ok(true),
        };
    }
}

/// Result screen: show the outcome, offer another round. Returns `false`
/// to quit.
fn prompt_result(session: &mut Session) -> Result<bool, String> {
    let Some(result) = session.last_result() else {
        session.go_home();
        return Ok(true);
    };

    print_round_result(result);
    if result.mode == Mode::Daily {
        print_share_links(result);
    }

    let again_label = match result.mode {
        Mode::Infinite => "🔁 Play again",
        Mode::Daily => "♾️ Try infinite",
    };
    println!("\n  p. {again_label}");
    println!("  h. 🏠 Home");

    loop {
        match get_user_input("Next (p/h)")?.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "p" | "play" | "again" | "y" | "yes" => {
                session.play_again();
                return Ok(true);
            }
            "h" | "home" | "n" | "no" => {
                session.go_home();
                println!();
                return Ok(true);
            }
            _ => println!("❌ Pick 'p' to keep playing or 'h' for home.\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
