//! Batch CLI and artifact emission for mcfgrammar.
//!
//! The runtime does no compilation of its own: it loads a schema
//! document, hands it to the compiler, and writes the resulting rule set
//! as JSON for the external recognizer generator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod emit;

pub use emit::{emit_json, emit_json_pretty};
