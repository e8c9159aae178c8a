//! Serialization of the compiled grammar artifact.

use mcfgrammar_compiler::CompiledGrammar;
use mcfgrammar_foundation::{Error, Result};

/// Serializes the artifact as compact JSON.
///
/// # Errors
/// Returns a [`Json`](mcfgrammar_foundation::ErrorKind::Json) error if
/// serialization fails.
pub fn emit_json(grammar: &CompiledGrammar) -> Result<String> {
    serde_json::to_string(grammar).map_err(|e| Error::json(e.to_string()))
}

/// Serializes the artifact as human-readable JSON.
///
/// # Errors
/// Returns a [`Json`](mcfgrammar_foundation::ErrorKind::Json) error if
/// serialization fails.
pub fn emit_json_pretty(grammar: &CompiledGrammar) -> Result<String> {
    serde_json::to_string_pretty(grammar).map_err(|e| Error::json(e.to_string()))
}
