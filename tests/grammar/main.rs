//! Integration tests for the built-in grammars.
//!
//! Acceptance is checked with a naive backtracking recognizer over the
//! emitted rule set; see `matcher`.

mod matcher;
mod ranges;
mod resources;
mod selectors;
mod snbt;
