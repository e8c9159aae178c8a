//! Integration tests for the schema compiler.
//!
//! Reuses the grammar suite's recognizer harness to check that compiled
//! command trees accept the command lines they should.

#[path = "../grammar/matcher.rs"]
mod matcher;

mod artifact;
mod warnings;
