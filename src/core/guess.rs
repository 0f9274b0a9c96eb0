//! Guess evaluation
//!
//! Normalizes submitted guesses and compares them against the hidden title,
//! classifying both exact and near-miss ("close") guesses.

/// Outcome of comparing a guess against the target title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The normalized guess equals the normalized title
    pub exact: bool,
    /// Not exact, but clearly in the neighborhood of the title
    pub close: bool,
}

/// Normalize a title or guess for comparison
///
/// Lowercases, strips punctuation, collapses whitespace runs to single
/// spaces, and trims. Punctuation is dropped without inserting a space, so
/// `"Don't"` and `"Dont"` normalize identically.
///
/// # Examples
/// ```
/// use moviemoji::core::normalize;
///
/// assert_eq!(normalize("  JURASSIC   PARK! "), "jurassic park");
/// assert_eq!(normalize("3 Idiots"), "3 idiots");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            pending_space = true;
        }
        // Punctuation and symbols are dropped entirely.
    }

    out
}

/// Evaluate a raw guess against the target title
///
/// Pure function of its inputs. Callers are expected to reject
/// empty/whitespace-only guesses before calling; such inputs evaluate to
/// neither exact nor close.
///
/// # Examples
/// ```
/// use moviemoji::core::evaluate;
///
/// assert!(evaluate("JURASSIC PARK!", "Jurassic Park").exact);
/// assert!(evaluate("the lion", "The Lion King").close);
/// ```
#[must_use]
pub fn evaluate(raw_guess: &str, target_title: &str) -> Evaluation {
    let guess = normalize(raw_guess);
    let title = normalize(target_title);

    let exact = !guess.is_empty() && guess == title;
    let close = !exact && is_close(&guess, &title);

    Evaluation { exact, close }
}

/// Close-guess heuristic over normalized strings
///
/// A guess is close when one string contains the other, or when all but at
/// most one of the shorter side's words overlap with a word on the other
/// side (substring match in either direction). Zero-overlap guesses are
/// never close.
fn is_close(guess: &str, title: &str) -> bool {
    if guess.is_empty() || title.is_empty() {
        return false;
    }

    if guess.contains(title) || title.contains(guess) {
        return true;
    }

    let guess_words: Vec<&str> = guess.split(' ').collect();
    let title_words: Vec<&str> = title.split(' ').collect();

    let overlap = guess_words
        .iter()
        .filter(|gw| {
            title_words
                .iter()
                .any(|tw| gw.contains(tw) || tw.contains(*gw))
        })
        .count();

    let needed = guess_words.len().min(title_words.len()).saturating_sub(1);
    overlap >= needed.max(1)
}
