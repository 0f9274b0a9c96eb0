//! Display functions for CLI results

use colored::Colorize;

use super::formatters::{attempt_track, format_duration};
use crate::catalog::{Catalog, Industry};
use crate::session::RoundResult;
use crate::share::{PLAY_URL, share_text, twitter_url, whatsapp_url};

/// Print the result of a finished round
pub fn print_round_result(result: &RoundResult) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    if result.correct {
        println!(
            "{}",
            "    🎉  C O R R E C T !  🎉    ".bright_green().bold()
        );
        println!("{}", "═".repeat(60).bright_cyan());

        let tries = if result.attempts == 1 { "try" } else { "tries" };
        println!(
            "\n  You guessed it in {} {tries}!",
            result.attempts.to_string().bright_cyan().bold()
        );
        println!("  Attempts: {}", attempt_track(result.attempts));
        println!(
            "  Time:     {}",
            format_duration(result.elapsed_seconds).bright_yellow()
        );
    } else {
        println!("{}", "    😅  O O P S !  😅    ".bright_red().bold());
        println!("{}", "═".repeat(60).bright_cyan());

        println!(
            "\n  The answer was: {}",
            result.movie.title().bright_white().bold()
        );
    }

    println!("\n  The clue was:   {}", result.movie.emojis());
    println!(
        "  {} {} · {} {}",
        result.industry.badge(),
        result.industry,
        result.mode.badge(),
        result.mode.label()
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the share text and intent links for a finished round
pub fn print_share_links(result: &RoundResult) {
    let text = share_text(result, PLAY_URL);

    println!("\n{}", "📤 Share your result:".bright_cyan().bold());
    println!("\n{}", text.bright_white());
    println!("\n  💬 WhatsApp: {}", whatsapp_url(&text).underline());
    println!("  🐦 Twitter:  {}", twitter_url(&text).underline());
    println!();
}

/// Print a spoiler-free catalog summary: industries, counts, and clues
pub fn print_catalog_summary(catalog: &Catalog) {
    println!("\n{}", "🎬 Movie Catalog".bright_cyan().bold());

    for industry in Industry::ALL {
        let movies = catalog.movies(industry);
        println!(
            "\n{} {} — {} {}",
            industry.badge(),
            industry.name().bright_yellow().bold(),
            movies.len().to_string().bright_cyan(),
            if movies.len() == 1 { "movie" } else { "movies" }
        );

        for movie in movies {
            // Clues only - titles are the answers.
            println!("   {}", movie.emojis());
        }
    }
    println!();
}

/// Print the locked-daily notice for an industry
pub fn print_daily_locked(industry: Industry) {
    println!(
        "\n{} Daily challenge for {} already completed - come back tomorrow!",
        "✅".bright_green(),
        industry.name().bright_yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MovieEntry;
    use crate::session::Mode;

    // Printing is side-effect only; these exercise the paths for panics.
    #[test]
    fn print_round_result_handles_both_outcomes() {
        let mut result = RoundResult {
            correct: true,
            movie: MovieEntry::new("Frozen", "❄️👸🏰", ["a", "b", "c"]).unwrap(),
            attempts: 1,
            elapsed_seconds: 30,
            industry: Industry::Hollywood,
            mode: Mode::Infinite,
        };
        print_round_result(&result);

        result.correct = false;
        result.attempts = 5;
        print_round_result(&result);
        print_share_links(&result);
    }

    #[test]
    fn print_catalog_summary_covers_embedded() {
        print_catalog_summary(&Catalog::embedded());
        print_daily_locked(Industry::Kollywood);
    }
}
