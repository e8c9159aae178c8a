//! Grammar expressions.
//!
//! An [`Expr`] is the body of a grammar production: terminals, references
//! to other named rules, and combinators over both. Expressions are plain
//! immutable data. Rules never embed each other directly, only by name,
//! which is what lets a rule body mention a sibling that has not been
//! defined yet.
//!
//! The builder functions at the bottom of this module are the vocabulary
//! the rest of the system is written in: `seq`, `choice`, `optional`,
//! `token`, `alias`, `field`, `prec`.

use crate::rules::RuleName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The body language of a grammar production.
///
/// Serializes as a tagged JSON object (`{"type": "SEQ", "members": [...]}`);
/// that tagged form is the wire contract with the external recognizer
/// generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Expr {
    /// Matches the empty string.
    Blank,

    /// An exact terminal token.
    Literal {
        /// The token text.
        value: String,
    },

    /// A regular-expression terminal.
    Pattern {
        /// The regex source.
        value: String,
    },

    /// A reference to a named rule.
    Symbol {
        /// The referenced rule name.
        name: RuleName,
    },

    /// All members in order.
    Seq {
        /// The sequenced members.
        members: Vec<Expr>,
    },

    /// Exactly one of the members.
    Choice {
        /// The alternative members.
        members: Vec<Expr>,
    },

    /// The content, or nothing.
    Optional {
        /// The optional content.
        content: Box<Expr>,
    },

    /// Zero or more repetitions of the content.
    Repeat {
        /// The repeated content.
        content: Box<Expr>,
    },

    /// One or more repetitions of the content.
    Repeat1 {
        /// The repeated content.
        content: Box<Expr>,
    },

    /// Lex the content as a single token.
    Token {
        /// The content to tokenize.
        content: Box<Expr>,
    },

    /// Present the content to consumers under a different rule name.
    Alias {
        /// The underlying content.
        content: Box<Expr>,
        /// The display name.
        name: RuleName,
        /// Whether the alias appears as a named node in recognizer output.
        named: bool,
    },

    /// Label a child for downstream tree queries.
    Field {
        /// The field label.
        name: String,
        /// The labelled content.
        content: Box<Expr>,
    },

    /// Static precedence for resolving lexical overlap.
    Prec {
        /// The precedence level (higher wins).
        level: i32,
        /// The content the precedence applies to.
        content: Box<Expr>,
    },

    /// Left-associative precedence.
    PrecLeft {
        /// The precedence level.
        level: i32,
        /// The content the precedence applies to.
        content: Box<Expr>,
    },
}

impl Expr {
    /// Visits every rule reference in this expression, depth-first.
    pub fn visit_symbols<F>(&self, visit: &mut F)
    where
        F: FnMut(&RuleName),
    {
        match self {
            Self::Blank | Self::Literal { .. } | Self::Pattern { .. } => {}
            Self::Symbol { name } => visit(name),
            Self::Seq { members } | Self::Choice { members } => {
                for member in members {
                    member.visit_symbols(visit);
                }
            }
            Self::Optional { content }
            | Self::Repeat { content }
            | Self::Repeat1 { content }
            | Self::Token { content }
            | Self::Alias { content, .. }
            | Self::Field { content, .. }
            | Self::Prec { content, .. }
            | Self::PrecLeft { content, .. } => content.visit_symbols(visit),
        }
    }

    /// Returns true if this expression is [`Expr::Blank`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Matches the empty string.
#[must_use]
pub fn blank() -> Expr {
    Expr::Blank
}

/// An exact terminal token.
pub fn lit(value: impl Into<String>) -> Expr {
    Expr::Literal {
        value: value.into(),
    }
}

/// A regular-expression terminal.
pub fn pattern(value: impl Into<String>) -> Expr {
    Expr::Pattern {
        value: value.into(),
    }
}

/// A reference to a named rule.
pub fn sym(name: impl Into<RuleName>) -> Expr {
    Expr::Symbol { name: name.into() }
}

/// All members in order. A one-element sequence collapses to its element.
pub fn seq(members: impl IntoIterator<Item = Expr>) -> Expr {
    let mut members: Vec<Expr> = members.into_iter().collect();
    if members.len() == 1 {
        members.pop().expect("length checked")
    } else {
        Expr::Seq { members }
    }
}

/// Exactly one of the members. A one-element choice collapses to its element.
pub fn choice(members: impl IntoIterator<Item = Expr>) -> Expr {
    let mut members: Vec<Expr> = members.into_iter().collect();
    if members.len() == 1 {
        members.pop().expect("length checked")
    } else {
        Expr::Choice { members }
    }
}

/// The content, or nothing.
#[must_use]
pub fn optional(content: Expr) -> Expr {
    Expr::Optional {
        content: Box::new(content),
    }
}

/// Zero or more repetitions.
#[must_use]
pub fn repeat(content: Expr) -> Expr {
    Expr::Repeat {
        content: Box::new(content),
    }
}

/// One or more repetitions.
#[must_use]
pub fn repeat1(content: Expr) -> Expr {
    Expr::Repeat1 {
        content: Box::new(content),
    }
}

/// Lex the content as a single token.
#[must_use]
pub fn token(content: Expr) -> Expr {
    Expr::Token {
        content: Box::new(content),
    }
}

/// Present the content under a different rule name.
pub fn alias(content: Expr, name: impl Into<RuleName>) -> Expr {
    Expr::Alias {
        content: Box::new(content),
        name: name.into(),
        named: true,
    }
}

/// Label a child for downstream tree queries.
pub fn field(name: impl Into<String>, content: Expr) -> Expr {
    Expr::Field {
        name: name.into(),
        content: Box::new(content),
    }
}

/// Static precedence for resolving lexical overlap.
#[must_use]
pub fn prec(level: i32, content: Expr) -> Expr {
    Expr::Prec {
        level,
        content: Box::new(content),
    }
}

/// Left-associative precedence at level 0.
#[must_use]
pub fn prec_left(content: Expr) -> Expr {
    Expr::PrecLeft {
        level: 0,
        content: Box::new(content),
    }
}
