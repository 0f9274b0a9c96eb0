//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear rules.

mod guess;
mod movie;
mod round;

pub use guess::{Evaluation, evaluate, normalize};
pub use movie::{HINT_COUNT, MovieEntry, MovieError};
pub use round::{MAX_ATTEMPTS, Phase, Round, Submission};
