//! JSON text components.
//!
//! A minimal JSON grammar (object, array, string, number, booleans,
//! null), reused as a general structured-data grammar wherever a command
//! takes a text component.

use mcfgrammar_foundation::expr::{choice, lit, optional, pattern, seq, sym};
use mcfgrammar_foundation::{Expr, Result, RuleSet};

use crate::combinators::{comma_sep, pair};
use crate::lexical::{decimal_digits, exponent_part};

/// JSON's integer form: no leading zeros, optional minus.
fn decimal_integer_literal() -> Expr {
    seq([
        optional(lit("-")),
        choice([
            lit("0"),
            seq([pattern("[1-9]"), optional(decimal_digits())]),
        ]),
    ])
}

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define("component", sym("_json_value"))?;

    rules.define(
        "_json_value",
        choice([
            sym("json_object"),
            sym("json_array"),
            sym("json_number"),
            sym("json_string"),
            sym("json_true"),
            sym("json_false"),
            sym("json_null"),
        ]),
    )?;

    rules.define(
        "json_object",
        seq([lit("{"), comma_sep(sym("json_pair")), lit("}")]),
    )?;

    rules.define(
        "json_pair",
        pair(sym("json_string"), lit(":"), sym("_json_value")),
    )?;

    rules.define(
        "json_array",
        seq([lit("["), comma_sep(sym("_json_value")), lit("]")]),
    )?;

    rules.define("json_string", sym("_double_quoted_string"))?;

    rules.define(
        "json_number",
        choice([
            seq([
                decimal_integer_literal(),
                lit("."),
                optional(decimal_digits()),
                optional(exponent_part()),
            ]),
            seq([decimal_integer_literal(), optional(exponent_part())]),
        ]),
    )?;

    rules.define("json_true", lit("true"))?;
    rules.define("json_false", lit("false"))?;
    rules.define("json_null", lit("null"))?;

    Ok(())
}
