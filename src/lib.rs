//! mcfgrammar - Schema-driven grammar compiler for the mcfunction command language
//!
//! This crate re-exports all layers of the mcfgrammar system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: mcfgrammar_runtime    — Batch CLI, artifact emission
//! Layer 2: mcfgrammar_compiler   — Argument type registry, schema compiler
//!          mcfgrammar_builtins   — Built-in primitive/structured/selector grammars
//! Layer 1: mcfgrammar_schema     — Command-tree schema model and loading
//! Layer 0: mcfgrammar_foundation — Grammar IR, rule arena, errors, warnings
//! ```

pub use mcfgrammar_builtins as builtins;
pub use mcfgrammar_compiler as compiler;
pub use mcfgrammar_foundation as foundation;
pub use mcfgrammar_runtime as runtime;
pub use mcfgrammar_schema as schema;
