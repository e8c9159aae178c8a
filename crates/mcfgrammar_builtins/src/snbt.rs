//! Structured tag values: the compound/array/list/scalar notation used
//! for item and entity metadata. Nesting is unbounded and recursive.

use mcfgrammar_foundation::expr::{choice, field, lit, optional, pattern, seq, sym, token};
use mcfgrammar_foundation::{Result, RuleSet};

use crate::combinators::{comma_sep, pair};
use crate::lexical::decimal_number;

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "snbt_compound",
        seq([lit("{"), comma_sep(sym("snbt_pair")), lit("}")]),
    )?;

    rules.define(
        "snbt_pair",
        pair(sym("_snbt_string"), lit(":"), sym("_snbt_value")),
    )?;

    rules.define(
        "_snbt_value",
        choice([
            sym("snbt_compound"),
            sym("snbt_array"),
            sym("snbt_list"),
            sym("snbt_number"),
            sym("snbt_true"),
            sym("snbt_false"),
            sym("_snbt_string"),
        ]),
    )?;

    rules.define(
        "snbt_list",
        seq([lit("["), comma_sep(sym("_snbt_value")), lit("]")]),
    )?;

    // An array is distinguished from a list by its mandatory element-type
    // tag: `[I; 1, 2, 3]`.
    rules.define(
        "snbt_array",
        seq([
            lit("["),
            field("type", sym("snbt_array_type")),
            lit(";"),
            comma_sep(sym("snbt_number")),
            lit("]"),
        ]),
    )?;
    rules.define("snbt_array_type", choice([lit("B"), lit("I"), lit("L")]))?;

    rules.define(
        "snbt_number",
        token(seq([decimal_number(), optional(pattern("[bBdDfFlLsS]"))])),
    )?;

    rules.define(
        "_snbt_string",
        choice([sym("quoted_string"), sym("literal_string")]),
    )?;

    rules.define("snbt_true", lit("true"))?;
    rules.define("snbt_false", lit("false"))?;

    Ok(())
}
