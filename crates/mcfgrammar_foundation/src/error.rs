//! Error and warning types for the mcfgrammar system.
//!
//! Uses `thiserror` for ergonomic error definition. Hard failures are
//! [`Error`]; recoverable compile-time conditions are [`Warning`] values
//! accumulated alongside the output, never thrown.

use std::fmt;

use thiserror::Error;

use crate::rules::RuleName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result alias for mcfgrammar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for mcfgrammar operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Slash-joined schema path where the error arose, when known.
    pub path: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, path: None }
    }

    /// Attaches a schema path to this error.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Creates a duplicate rule definition error.
    #[must_use]
    pub fn duplicate_rule(name: RuleName) -> Self {
        Self::new(ErrorKind::DuplicateRule(name))
    }

    /// Creates a declared-but-never-defined rule error.
    #[must_use]
    pub fn unfinished_rule(name: RuleName) -> Self {
        Self::new(ErrorKind::UnfinishedRule(name))
    }

    /// Creates a dangling rule reference error.
    #[must_use]
    pub fn unknown_rule_reference(referrer: RuleName, target: RuleName) -> Self {
        Self::new(ErrorKind::UnknownRuleReference { referrer, target })
    }

    /// Creates an invalid rule name error.
    pub fn invalid_rule_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRuleName(name.into()))
    }

    /// Creates a malformed schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Schema(message.into()))
    }

    /// Creates an invalid argument property error.
    pub fn invalid_property(parser: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidProperty {
            parser: parser.into(),
            message: message.into(),
        })
    }

    /// Creates an invalid JSON document error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Json(message.into()))
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule name was defined twice; rules are written exactly once.
    #[error("duplicate rule definition: {0}")]
    DuplicateRule(RuleName),

    /// A rule was forward-declared but never given a body.
    #[error("rule declared but never defined: {0}")]
    UnfinishedRule(RuleName),

    /// A rule body references a name the arena has never seen.
    #[error("rule {referrer} references unknown rule {target}")]
    UnknownRuleReference {
        /// The rule containing the reference.
        referrer: RuleName,
        /// The name that does not resolve.
        target: RuleName,
    },

    /// A rule name that is not a single identifier.
    #[error("invalid rule name: {0:?}")]
    InvalidRuleName(String),

    /// The schema document violates the input contract.
    #[error("malformed schema: {0}")]
    Schema(String),

    /// An argument property failed load-time validation.
    #[error("invalid property for {parser}: {message}")]
    InvalidProperty {
        /// The parser id whose properties were malformed.
        parser: String,
        /// What was wrong.
        message: String,
    },

    /// The schema document was not valid JSON.
    #[error("invalid schema document: {0}")]
    Json(String),

    /// An I/O failure while reading input or writing the artifact.
    #[error("io error: {0}")]
    Io(String),
}

/// Recoverable conditions recorded during compilation.
///
/// A warning degrades the output (a fallback rule, a flagged schema node)
/// but never aborts the compile; the rest of the tree still produces a
/// usable grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Warning {
    /// The schema named a parser the registry does not know; the node's
    /// own name was emitted as a literal alias instead.
    UnknownParser {
        /// Slash-joined path of the offending node.
        path: String,
        /// The unrecognized parser id.
        parser: String,
    },

    /// A node with no children, no redirect, and no executable flag: no
    /// command can end or continue there.
    DeadNode {
        /// Slash-joined path of the offending node.
        path: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParser { path, parser } => {
                write!(
                    f,
                    "unknown parser {parser:?} at {path}; falling back to literal name"
                )
            }
            Self::DeadNode { path } => {
                write!(f, "dead schema node at {path}: no children, redirect, or executable flag")
            }
        }
    }
}
