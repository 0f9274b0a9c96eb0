//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_summary, print_daily_locked, print_round_result, print_share_links};
