//! Grammar IR, rule-set arena, and error types for mcfgrammar.
//!
//! This crate provides:
//! - [`Expr`] - The body language of a grammar production
//! - [`RuleSet`] - The write-once arena of named productions
//! - [`RuleName`] / [`RuleId`] - Stable rule identifiers
//! - [`Error`] / [`Warning`] - Hard failures and recoverable conditions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expr;
pub mod rules;

pub use error::{Error, ErrorKind, Result, Warning};
pub use expr::Expr;
pub use rules::{RuleId, RuleName, RuleSet};
