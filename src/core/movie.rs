//! Movie entry representation
//!
//! A `MovieEntry` pairs a title with its emoji clue and a fixed triple of
//! hints, revealed one per wrong guess.

use std::fmt;

/// Number of hints every movie carries
pub const HINT_COUNT: usize = 3;

/// A movie with its emoji clue and hint triple
///
/// Immutable once constructed. The hint array enforces that every entry has
/// exactly [`HINT_COUNT`] hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieEntry {
    title: String,
    emojis: String,
    hints: [String; HINT_COUNT],
}

/// Error type for invalid movie entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    EmptyTitle,
    EmptyClue,
    EmptyHint(usize),
}

impl fmt::Display for MovieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Movie title must not be empty"),
            Self::EmptyClue => write!(f, "Emoji clue must not be empty"),
            Self::EmptyHint(index) => write!(f, "Hint {} must not be empty", index + 1),
        }
    }
}

impl std::error::Error for MovieError {}

impl MovieEntry {
    /// Create a new movie entry
    ///
    /// # Errors
    /// Returns `MovieError` if the title, the emoji clue, or any hint is
    /// empty after trimming.
    ///
    /// # Examples
    /// ```
    /// use moviemoji::core::MovieEntry;
    ///
    /// let movie = MovieEntry::new(
    ///     "Frozen",
    ///     "❄️👸🏰",
    ///     ["Disney animated", "Ice powers", "Let it go"],
    /// )
    /// .unwrap();
    /// assert_eq!(movie.title(), "Frozen");
    ///
    /// assert!(MovieEntry::new("", "❄️", ["a", "b", "c"]).is_err());
    /// ```
    pub fn new(
        title: impl Into<String>,
        emojis: impl Into<String>,
        hints: [&str; HINT_COUNT],
    ) -> Result<Self, MovieError> {
        let title: String = title.into().trim().to_string();
        let emojis: String = emojis.into().trim().to_string();

        if title.is_empty() {
            return Err(MovieError::EmptyTitle);
        }
        if emojis.is_empty() {
            return Err(MovieError::EmptyClue);
        }
        for (i, hint) in hints.iter().enumerate() {
            if hint.trim().is_empty() {
                return Err(MovieError::EmptyHint(i));
            }
        }

        Ok(Self {
            title,
            emojis,
            hints: hints.map(|h| h.trim().to_string()),
        })
    }

    /// The movie title (the answer the player is guessing)
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The emoji clue shown to the player
    #[inline]
    #[must_use]
    pub fn emojis(&self) -> &str {
        &self.emojis
    }

    /// All hints, in reveal order
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[String; HINT_COUNT] {
        &self.hints
    }

    /// The hint at a specific index (0-based)
    ///
    /// # Panics
    /// Panics if `index >= HINT_COUNT`.
    #[inline]
    #[must_use]
    pub fn hint(&self, index: usize) -> &str {
        &self.hints[index]
    }
}

impl fmt::Display for MovieEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emojis, self.title)
    }
}
