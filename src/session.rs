//! Session state and screen routing
//!
//! A [`Session`] is the single owner of all game state. Screens receive
//! read-only snapshots of it and forward user intents back as method
//! calls; every mutation happens synchronously inside one of those calls.
//!
//! Intents arriving on the wrong screen are caller-ordering bugs and are
//! ignored as documented no-ops.

use rustc_hash::FxHashSet;

use crate::catalog::{Catalog, Industry};
use crate::core::{MovieEntry, Round, Submission};

/// The four presentation views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    ModeSelect,
    Playing,
    Result,
}

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One round per industry per session
    Daily,
    /// Unlimited successive rounds
    Infinite,
}

impl Mode {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily Challenge",
            Self::Infinite => "Infinite Mode",
        }
    }

    /// Badge emoji shown next to the label
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Daily => "📆",
            Self::Infinite => "♾️",
        }
    }
}

/// Snapshot of a finished round, shown on the result screen
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub correct: bool,
    pub movie: MovieEntry,
    pub attempts: usize,
    pub elapsed_seconds: u64,
    pub industry: Industry,
    pub mode: Mode,
}

/// All game state for one app run
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    screen: Screen,
    industry: Option<Industry>,
    mode: Option<Mode>,
    round: Option<Round>,
    last_result: Option<RoundResult>,
    completed_dailies: FxHashSet<Industry>,
}

impl Session {
    /// Start a fresh session at the home screen
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Home,
            industry: None,
            mode: None,
            round: None,
            last_result: None,
            completed_dailies: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[inline]
    #[must_use]
    pub const fn industry(&self) -> Option<Industry> {
        self.industry
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// The active round, while on the playing screen
    #[inline]
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The last finished round, while on the result screen
    #[inline]
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the industry's daily challenge was already played this
    /// session
    #[must_use]
    pub fn daily_completed(&self, industry: Industry) -> bool {
        self.completed_dailies.contains(&industry)
    }

    /// Home screen: choose a film industry
    pub fn select_industry(&mut self, industry: Industry) {
        if self.screen == Screen::Home {
            self.industry = Some(industry);
            self.screen = Screen::ModeSelect;
        }
    }

    /// Mode-select screen: choose a mode and start a round
    ///
    /// Returns `false` without starting a round when called off the
    /// mode-select screen, or when the industry's daily challenge is
    /// already completed this session.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if self.screen != Screen::ModeSelect {
            return false;
        }
        let Some(industry) = self.industry else {
            return false;
        };

        if mode == Mode::Daily && self.daily_completed(industry) {
            return false;
        }

        self.mode = Some(mode);
        self.start_round(industry);
        true
    }

    /// Playing screen: submit a guess
    ///
    /// Forwards to the round; a terminal transition moves to the result
    /// screen and, in daily mode, marks the industry completed.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Submission {
        if self.screen != Screen::Playing {
            return Submission::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return Submission::Ignored;
        };

        let submission = round.submit(raw_guess);
        match submission {
            Submission::Won => self.finish_round(true),
            Submission::Lost => self.finish_round(false),
            Submission::Wrong { .. } | Submission::Ignored => {}
        }
        submission
    }

    /// Playing screen: give up, losing the round immediately
    pub fn skip(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        if let Some(round) = self.round.as_mut() {
            round.skip();
            self.finish_round(false);
        }
    }

    /// Result screen: play another round
    ///
    /// Infinite mode starts a new round in the same industry; daily mode
    /// returns to mode select (the daily is spent).
    pub fn play_again(&mut self) {
        if self.screen != Screen::Result {
            return;
        }
        let (Some(industry), Some(mode)) = (self.industry, self.mode) else {
            return;
        };

        self.last_result = None;
        match mode {
            Mode::Infinite => self.start_round(industry),
            Mode::Daily => {
                self.mode = None;
                self.screen = Screen::ModeSelect;
            }
        }
    }

    /// Go back one screen: mode select → home, playing → mode select
    ///
    /// Leaving the playing screen abandons the round without recording a
    /// result.
    pub fn back(&mut self) {
        match self.screen {
            Screen::ModeSelect => {
                self.industry = None;
                self.screen = Screen::Home;
            }
            Screen::Playing => {
                self.round = None;
                self.mode = None;
                self.screen = Screen::ModeSelect;
            }
            Screen::Home | Screen::Result => {}
        }
    }

    /// Reset to the home screen
    ///
    /// Completed dailies are session-scoped and survive this.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.industry = None;
        self.mode = None;
        self.round = None;
        self.last_result = None;
    }

    fn start_round(&mut self, industry: Industry) {
        let movie = self.catalog.pick(industry).clone();
        self.round = Some(Round::new(movie));
        self.screen = Screen::Playing;
    }

    fn finish_round(&mut self, correct: bool) {
        let (Some(round), Some(industry), Some(mode)) =
            (self.round.take(), self.industry, self.mode)
        else {
            return;
        };

        if mode == Mode::Daily {
            self.completed_dailies.insert(industry);
        }

        self.last_result = Some(RoundResult {
            correct,
            attempts: round.attempts_used(),
            elapsed_seconds: round.elapsed_seconds(),
            movie: round.movie().clone(),
            industry,
            mode,
        });
        self.screen = Screen::Result;
    }
}
