//! Command-tree schema model and JSON loading for mcfgrammar.
//!
//! This crate provides:
//! - [`CommandSchema`] / [`CommandNode`] - The immutable in-memory command tree
//! - [`ArgumentSpec`] - Validated, typed argument specializations
//! - Loading from the `commands.json` document shape
//!
//! The flow is: JSON document → raw mirror structs → load-time validation
//! → typed model → `SchemaCompiler`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod model;

pub use model::{ArgumentSpec, CommandNode, CommandSchema, NodeKind, Redirect, StringMode};
