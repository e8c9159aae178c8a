//! Lexical primitives: numbers, strings, identifiers, whitespace.

use mcfgrammar_foundation::expr::{
    alias, choice, lit, optional, pattern, prec, repeat1, seq, sym, token,
};
use mcfgrammar_foundation::{Expr, Result, RuleSet};

/// A run of decimal digits.
pub(crate) fn decimal_digits() -> Expr {
    pattern("\\d+")
}

/// Digits with an optional leading sign.
pub(crate) fn signed_integer() -> Expr {
    seq([optional(choice([lit("-"), lit("+")])), decimal_digits()])
}

/// `e`/`E` exponent suffix with a signed integer.
pub(crate) fn exponent_part() -> Expr {
    seq([choice([lit("e"), lit("E")]), signed_integer()])
}

/// Integer part with optional fraction, fraction-only, or integer-only.
pub(crate) fn decimal_number() -> Expr {
    choice([
        seq([signed_integer(), lit("."), optional(decimal_digits())]),
        seq([lit("."), decimal_digits()]),
        signed_integer(),
    ])
}

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define("integer", token(signed_integer()))?;
    rules.define("decimal", token(decimal_number()))?;

    rules.define(
        "quoted_string",
        choice([sym("_double_quoted_string"), sym("_single_quoted_string")]),
    )?;
    rules.define(
        "_double_quoted_string",
        choice([
            lit("\"\""),
            seq([
                lit("\""),
                alias(sym("double_quoted_string_content"), "string_content"),
                lit("\""),
            ]),
        ]),
    )?;
    rules.define(
        "double_quoted_string_content",
        repeat1(choice([
            prec(1, pattern("[^\\\\\"\\n]+")),
            sym("escape_sequence"),
        ])),
    )?;
    rules.define(
        "_single_quoted_string",
        choice([
            lit("''"),
            seq([
                lit("'"),
                alias(sym("single_quoted_string_content"), "string_content"),
                lit("'"),
            ]),
        ]),
    )?;
    rules.define(
        "single_quoted_string_content",
        repeat1(choice([
            prec(1, pattern("[^\\\\'\\n]+")),
            sym("escape_sequence"),
        ])),
    )?;
    rules.define(
        "escape_sequence",
        seq([
            lit("\\"),
            choice([
                pattern("(\\\"|\\'|\\\\|\\/|b|f|n|r|t)"),
                pattern("u[0-9a-fA-F]{4}"),
            ]),
        ]),
    )?;

    // An unquoted token overlaps every keyword, so it yields to them.
    rules.define("literal_string", prec(-1, pattern("[a-zA-Z0-9_.+-]+")))?;
    rules.define("remaining_string", pattern(".+"))?;
    rules.define("word", pattern("[^\\s]+"))?;
    rules.define("key", pattern("[0-9a-zA-Z_.:/+-]+"))?;

    rules.define(
        "uuid",
        pattern(
            "[0-9a-fA-F]{1,8}-[0-9a-fA-F]{1,4}-[0-9a-fA-F]{1,4}-[0-9a-fA-F]{1,4}-[0-9a-fA-F]{1,12}",
        ),
    )?;
    rules.define("player_name", pattern("[0-9a-zA-Z_.#%$§-]+"))?;

    rules.define("true", lit("true"))?;
    rules.define("false", lit("false"))?;

    // The universal token boundary for command syntax is a single space.
    rules.define("_ws", lit(" "))?;
    rules.define("_ws1", pattern("[ \\t]+"))?;
    rules.define("_nl", pattern("\\r?\\n"))?;

    Ok(())
}
