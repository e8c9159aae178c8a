//! Built-in grammars for the mcfunction command language.
//!
//! Everything a command line can contain besides the command tree itself
//! is defined here: lexical primitives, numeric ranges, coordinates,
//! resource locations, SNBT tag values, JSON text components, entity
//! selectors, and the line framing of a command file.
//!
//! # Modules
//!
//! - [`combinators`] - Shared construction vocabulary (separated lists, pairs, prefixes)
//! - [`lexical`] - Numbers, strings, identifiers, whitespace
//! - [`numeric`] - Integer and decimal ranges
//! - [`position`] - Coordinate axes, positions, rotation
//! - [`resource`] - Resource locations and constant resource ids
//! - [`snbt`] - Structured tag values (compound/array/list/scalar)
//! - [`text`] - JSON text components
//! - [`selector`] - Entity selectors and their predicate list
//! - [`values`] - Remaining argument value grammars (blocks, items, paths, particles, …)
//! - [`framing`] - Lines, comments, and the command-file rule

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinators;
pub mod framing;
pub mod lexical;
pub mod numeric;
pub mod position;
pub mod resource;
pub mod selector;
pub mod snbt;
pub mod text;
pub mod values;

use mcfgrammar_foundation::{Result, RuleSet};

/// Installs every built-in rule into the arena.
///
/// The set leaves exactly one declaration unfinished: `cmd_line`, the
/// entry production the schema compiler defines from the command tree.
///
/// # Errors
/// Fails only if a rule name in the arena is already taken, which means
/// the arena was not fresh.
pub fn install(rules: &mut RuleSet) -> Result<()> {
    lexical::install(rules)?;
    numeric::install(rules)?;
    position::install(rules)?;
    resource::install(rules)?;
    snbt::install(rules)?;
    text::install(rules)?;
    selector::install(rules)?;
    values::install(rules)?;
    framing::install(rules)?;
    Ok(())
}
