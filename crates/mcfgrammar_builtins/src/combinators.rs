//! Shared construction vocabulary for the built-in grammars.
//!
//! Bracketed value syntax tolerates horizontal whitespace around its
//! separators; command syntax never does. The separated-list helpers here
//! thread that optional whitespace, so the rules built from them stay
//! terse.

use mcfgrammar_foundation::Expr;
use mcfgrammar_foundation::expr::{choice, field, lit, optional, repeat, seq, sym};

/// Optional horizontal whitespace inside bracketed value syntax.
#[must_use]
pub fn ws_opt() -> Expr {
    optional(sym("_ws1"))
}

/// One or more occurrences of `rule`, separated by `separator`, with
/// optional whitespace around every element.
#[must_use]
pub fn sep1(rule: Expr, separator: Expr) -> Expr {
    seq([
        ws_opt(),
        rule.clone(),
        ws_opt(),
        repeat(seq([separator, ws_opt(), rule, ws_opt()])),
    ])
}

/// Like [`sep1`], also permitting one trailing separator.
#[must_use]
pub fn sep_trailing(rule: Expr, separator: Expr) -> Expr {
    seq([sep1(rule, separator.clone()), ws_opt(), optional(separator)])
}

/// Zero or more occurrences of `rule`, separated by `separator`, with a
/// trailing separator permitted.
#[must_use]
pub fn sep(rule: Expr, separator: Expr) -> Expr {
    optional(sep_trailing(rule, separator))
}

/// Comma-separated list, possibly empty, trailing comma permitted.
#[must_use]
pub fn comma_sep(rule: Expr) -> Expr {
    sep(rule, lit(","))
}

/// A `key <sep> value` pair with `key`/`value` fields and optional
/// whitespace around the separator.
#[must_use]
pub fn pair(key: Expr, separator: Expr, value: Expr) -> Expr {
    seq([
        field("key", key),
        ws_opt(),
        separator,
        ws_opt(),
        field("value", value),
    ])
}

/// Optional `#` prefix marking a tag reference.
#[must_use]
pub fn tagged(rule: Expr) -> Expr {
    seq([optional(lit("#")), rule])
}

/// Optional `!` prefix marking a negated match. Only predicate positions
/// reference this; a plain identifier never carries it.
#[must_use]
pub fn negatable(rule: Expr) -> Expr {
    seq([optional(lit("!")), rule])
}

/// A range over a base value: bare value, `min..max`, `min..`, or `..max`.
#[must_use]
pub fn range_of(rule: Expr) -> Expr {
    choice([
        rule.clone(),
        seq([
            field("min", rule.clone()),
            lit(".."),
            optional(field("max", rule.clone())),
        ]),
        seq([lit(".."), field("max", rule)]),
    ])
}

/// A single axis value: absolute number, or a relative prefix with an
/// optional offset. The caret (local) prefix is legal only where `local`
/// is set; rotation and plain relative coordinates take `~` alone.
#[must_use]
pub fn axis(number: Expr, local: bool) -> Expr {
    let prefixes = if local {
        choice([lit("~"), lit("^")])
    } else {
        lit("~")
    };
    choice([number.clone(), seq([prefixes, optional(number)])])
}
