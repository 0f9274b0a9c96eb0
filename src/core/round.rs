//! Round state machine
//!
//! One round runs from target selection to win or loss. The round records
//! guesses, enforces the attempt cap, advances hint exposure, and tracks
//! elapsed time for the result screen.

use std::time::{Duration, Instant};

use crate::core::guess::evaluate;
use crate::core::movie::{HINT_COUNT, MovieEntry};

/// Maximum guesses per round
pub const MAX_ATTEMPTS: usize = 5;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting guesses
    Guessing,
    /// Ended with a correct guess
    Won,
    /// Ended with attempts exhausted or an explicit skip
    Lost,
}

/// Outcome of a single submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Empty guess, or the round was already over; nothing was recorded
    Ignored,
    /// Wrong guess with attempts remaining
    Wrong { close: bool },
    /// Exact match; the round is won
    Won,
    /// Wrong guess on the final attempt; the round is lost
    Lost,
}

/// A single playthrough against one hidden movie
#[derive(Debug, Clone)]
pub struct Round {
    movie: MovieEntry,
    guesses: Vec<String>,
    phase: Phase,
    started: Instant,
    final_elapsed: Option<Duration>,
}

impl Round {
    /// Start a round against the given movie, resetting the clock
    #[must_use]
    pub fn new(movie: MovieEntry) -> Self {
        Self {
            movie,
            guesses: Vec::new(),
            phase: Phase::Guessing,
            started: Instant::now(),
            final_elapsed: None,
        }
    }

    /// The hidden movie for this round
    #[inline]
    #[must_use]
    pub const fn movie(&self) -> &MovieEntry {
        &self.movie
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the round has reached a terminal phase
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Guessing
    }

    /// Guesses recorded so far, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Number of attempts consumed
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    /// 1-indexed number of the attempt currently being played
    #[must_use]
    pub fn attempt(&self) -> usize {
        (self.guesses.len() + 1).min(MAX_ATTEMPTS)
    }

    /// Submit a guess
    ///
    /// Records the guess and transitions the round: an exact match wins, a
    /// wrong guess on the final attempt loses, anything else stays in
    /// [`Phase::Guessing`] and exposes the next hint. Empty guesses and
    /// guesses after the round is over are ignored and record nothing.
    pub fn submit(&mut self, raw_guess: &str) -> Submission {
        if self.is_over() {
            return Submission::Ignored;
        }

        let trimmed = raw_guess.trim();
        if trimmed.is_empty() {
            return Submission::Ignored;
        }

        let eval = evaluate(trimmed, self.movie.title());
        self.guesses.push(trimmed.to_string());

        if eval.exact {
            self.finish(Phase::Won);
            Submission::Won
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.finish(Phase::Lost);
            Submission::Lost
        } else {
            Submission::Wrong { close: eval.close }
        }
    }

    /// Give up on the round, losing immediately
    ///
    /// No-op if the round is already over.
    pub fn skip(&mut self) {
        if !self.is_over() {
            self.finish(Phase::Lost);
        }
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.final_elapsed = Some(self.started.elapsed());
    }

    /// Elapsed time in whole seconds
    ///
    /// Frozen at the moment the round ends; live while guessing.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.final_elapsed
            .unwrap_or_else(|| self.started.elapsed())
            .as_secs()
    }

    /// Wrong guesses recorded so far
    fn wrong_count(&self) -> usize {
        match self.phase {
            // A won round's last guess was the correct one.
            Phase::Won => self.guesses.len().saturating_sub(1),
            _ => self.guesses.len(),
        }
    }

    /// Whether the full hint triple is exposed
    ///
    /// Happens on the final attempt, once every earlier guess was wrong.
    #[must_use]
    pub fn all_hints_exposed(&self) -> bool {
        self.phase == Phase::Guessing && self.wrong_count() >= MAX_ATTEMPTS - 1
    }

    /// The most recently revealed hint, with its 0-based index
    ///
    /// `None` before the first wrong guess and once the round is over.
    /// Wrong guess n reveals hint `min(n, HINT_COUNT - 1)`, so late wrong
    /// guesses keep showing the last hint.
    #[must_use]
    pub fn current_hint(&self) -> Option<(usize, &str)> {
        if self.phase != Phase::Guessing {
            return None;
        }

        let wrong = self.wrong_count();
        if wrong == 0 {
            return None;
        }

        let index = (wrong - 1).min(HINT_COUNT - 1);
        Some((index, self.movie.hint(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen() -> MovieEntry {
        MovieEntry::new(
            "Frozen",
            "❄️👸🏰",
            ["Disney animated", "Ice powers", "Let it go"],
        )
        .unwrap()
    }

    #[test]
    fn round_starts_guessing() {
        let round = Round::new(frozen());
        assert_eq!(round.phase(), Phase::Guessing);
        assert!(!round.is_over());
        assert_eq!(round.attempt(), 1);
        assert!(round.guesses().is_empty());
        assert_eq!(round.current_hint(), None);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut round = Round::new(frozen());
        assert_eq!(round.submit("frozen"), Submission::Won);
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn win_on_later_attempt_counts_all_guesses() {
        let mut round = Round::new(frozen());
        assert!(matches!(round.submit("Toy Story"), Submission::Wrong { .. }));
        assert!(matches!(round.submit("Tangled"), Submission::Wrong { .. }));
        assert_eq!(round.submit("FROZEN!"), Submission::Won);
        assert_eq!(round.attempts_used(), 3);
    }

    #[test]
    fn attempt_cap_loses_round() {
        let mut round = Round::new(frozen());
        for _ in 0..MAX_ATTEMPTS - 1 {
            assert!(matches!(round.submit("wrong"), Submission::Wrong { .. }));
        }
        assert_eq!(round.submit("wrong"), Submission::Lost);
        assert_eq!(round.phase(), Phase::Lost);
        assert_eq!(round.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn no_guesses_accepted_after_round_over() {
        let mut round = Round::new(frozen());
        round.submit("frozen");
        assert_eq!(round.submit("frozen"), Submission::Ignored);
        assert_eq!(round.attempts_used(), 1);

        let mut round = Round::new(frozen());
        for _ in 0..MAX_ATTEMPTS {
            round.submit("wrong");
        }
        assert_eq!(round.submit("frozen"), Submission::Ignored);
        assert_eq!(round.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn empty_guess_ignored_and_not_recorded() {
        let mut round = Round::new(frozen());
        assert_eq!(round.submit(""), Submission::Ignored);
        assert_eq!(round.submit("   "), Submission::Ignored);
        assert!(round.guesses().is_empty());
        assert_eq!(round.attempt(), 1);
    }

    #[test]
    fn close_guess_reported() {
        let mut round = Round::new(frozen());
        assert_eq!(round.submit("froze"), Submission::Wrong { close: true });
        assert_eq!(round.submit("Tangled"), Submission::Wrong { close: false });
    }

    #[test]
    fn skip_loses_immediately() {
        let mut round = Round::new(frozen());
        round.submit("wrong");
        round.skip();
        assert_eq!(round.phase(), Phase::Lost);
        // Terminal: further skips and submits change nothing.
        round.skip();
        assert_eq!(round.submit("frozen"), Submission::Ignored);
    }

    #[test]
    fn hint_schedule_follows_wrong_guesses() {
        let mut round = Round::new(frozen());

        round.submit("wrong one");
        assert_eq!(round.current_hint(), Some((0, "Disney animated")));
        assert!(!round.all_hints_exposed());

        round.submit("wrong two");
        assert_eq!(round.current_hint(), Some((1, "Ice powers")));

        round.submit("wrong three");
        assert_eq!(round.current_hint(), Some((2, "Let it go")));
        assert!(!round.all_hints_exposed());

        // Fourth wrong guess: final attempt pending, everything exposed.
        round.submit("wrong four");
        assert!(round.all_hints_exposed());
    }

    #[test]
    fn hints_stop_after_round_over() {
        let mut round = Round::new(frozen());
        round.submit("wrong");
        round.submit("frozen");
        assert_eq!(round.current_hint(), None);
        assert!(!round.all_hints_exposed());
    }

    #[test]
    fn elapsed_seconds_frozen_after_finish() {
        let mut round = Round::new(frozen());
        round.submit("frozen");
        let first = round.elapsed_seconds();
        let second = round.elapsed_seconds();
        assert_eq!(first, second);
    }

    #[test]
    fn guesses_preserve_submission_order() {
        let mut round = Round::new(frozen());
        round.submit("first");
        round.submit("second");
        assert_eq!(round.guesses(), ["first", "second"]);
    }
}
