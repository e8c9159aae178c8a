//! Argument type registry and schema compiler for mcfgrammar.
//!
//! This crate provides:
//! - [`ArgumentTypeRegistry`] - Maps parser ids (plus typed specializations) to grammar fragments
//! - [`CompileContext`] - Read-only registry plus the append-only warnings accumulator
//! - [`SchemaCompiler`] - Walks the command tree and emits the named rule set
//! - [`CompiledGrammar`] - The sole output artifact

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod context;
pub mod registry;

pub use compile::{CompiledGrammar, SchemaCompiler, GRAMMAR_NAME};
pub use context::CompileContext;
pub use registry::ArgumentTypeRegistry;
