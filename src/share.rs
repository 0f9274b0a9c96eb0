//! Share payload assembly
//!
//! Builds the brag text for a finished round and the WhatsApp / Twitter
//! intent links that carry it. Pure string construction - opening the
//! links is left to the player.

use url::Url;

use crate::output::formatters::format_duration;
use crate::session::RoundResult;

/// Default landing page appended to share texts
pub const PLAY_URL: &str = "https://moviemoji.app";

/// Assemble the share text for a finished round
///
/// # Examples
/// ```
/// use moviemoji::catalog::Industry;
/// use moviemoji::core::MovieEntry;
/// use moviemoji::session::{Mode, RoundResult};
/// use moviemoji::share::{PLAY_URL, share_text};
///
/// let result = RoundResult {
///     correct: true,
///     movie: MovieEntry::new("Frozen", "❄️👸🏰", ["a", "b", "c"]).unwrap(),
///     attempts: 2,
///     elapsed_seconds: 75,
///     industry: Industry::Hollywood,
///     mode: Mode::Daily,
/// };
/// let text = share_text(&result, PLAY_URL);
/// assert!(text.contains("❄️👸🏰"));
/// assert!(text.contains("2 tries"));
/// ```
#[must_use]
pub fn share_text(result: &RoundResult, base_url: &str) -> String {
    let header = format!("🎬 Emoji Movie Guessing - {}", result.mode.label());

    if result.correct {
        format!(
            "{header}\nI guessed the {} movie in {} tries and {}!\n🧩 Clue: {}\nCan you beat me?\n\nPlay now 👉 {base_url}",
            result.industry,
            result.attempts,
            format_duration(result.elapsed_seconds),
            result.movie.emojis(),
        )
    } else {
        format!(
            "{header}\nI couldn't guess the {} movie!\n🧩 Clue: {}\n\nCan you do better? 👉 {base_url}",
            result.industry,
            result.movie.emojis(),
        )
    }
}

/// WhatsApp intent link carrying the share text
#[must_use]
pub fn whatsapp_url(text: &str) -> String {
    intent_url("https://wa.me/", text)
}

/// Twitter intent link carrying the share text
#[must_use]
pub fn twitter_url(text: &str) -> String {
    intent_url("https://twitter.com/intent/tweet", text)
}

fn intent_url(endpoint: &str, text: &str) -> String {
    // Static endpoints, guaranteed to parse.
    let mut url = Url::parse(endpoint).expect("intent endpoint is a valid URL");
    url.query_pairs_mut().append_pair("text", text);
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Industry;
    use crate::core::MovieEntry;
    use crate::session::Mode;

    fn won_result() -> RoundResult {
        RoundResult {
            correct: true,
            movie: MovieEntry::new(
                "Jurassic Park",
                "🦖🌴🌋",
                ["Dinosaur adventure", "Based on a novel", "Theme park gone wrong"],
            )
            .unwrap(),
            attempts: 3,
            elapsed_seconds: 92,
            industry: Industry::Hollywood,
            mode: Mode::Daily,
        }
    }

    #[test]
    fn share_text_for_win_includes_stats() {
        let text = share_text(&won_result(), PLAY_URL);
        assert!(text.contains("Daily Challenge"));
        assert!(text.contains("Hollywood"));
        assert!(text.contains("3 tries"));
        assert!(text.contains("1m 32s"));
        assert!(text.contains("🦖🌴🌋"));
        assert!(text.contains(PLAY_URL));
    }

    #[test]
    fn share_text_for_loss_omits_attempts() {
        let mut result = won_result();
        result.correct = false;
        result.mode = Mode::Infinite;

        let text = share_text(&result, PLAY_URL);
        assert!(text.contains("Infinite Mode"));
        assert!(text.contains("couldn't guess"));
        assert!(!text.contains("tries"));
        assert!(text.contains("🦖🌴🌋"));
    }

    #[test]
    fn share_text_never_reveals_title() {
        // The clue is fair game; the answer is not.
        for correct in [true, false] {
            let mut result = won_result();
            result.correct = correct;
            assert!(!share_text(&result, PLAY_URL).contains("Jurassic Park"));
        }
    }

    #[test]
    fn intent_urls_encode_payload() {
        let whatsapp = whatsapp_url("hello world 🎬");
        assert!(whatsapp.starts_with("https://wa.me/?text="));
        assert!(!whatsapp.contains(' '));

        let twitter = twitter_url("hello world");
        assert!(twitter.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(twitter.contains("hello+world"));
    }
}
