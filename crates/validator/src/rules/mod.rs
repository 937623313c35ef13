//! Built-in rules

pub mod pattern;

pub use pattern::{PatternOptions, PatternRule, matches};
