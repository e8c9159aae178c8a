//! Integer and decimal range grammars.
//!
//! The decimal variant has a genuine lexical overlap: `3..5` begins with
//! text that also reads as the decimal `3.`. The two-dot range reading
//! must always win, so the hidden range forms carry precedence 1 and the
//! trailing-dot decimal token sits at precedence -1. A recognizer built
//! from these rules never consumes `3..` as `3.` plus a stray dot.

use mcfgrammar_foundation::expr::{alias, choice, lit, optional, prec, seq, sym, token};
use mcfgrammar_foundation::{Result, RuleSet};

use crate::combinators::range_of;
use crate::lexical::{decimal_digits, signed_integer};

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define("int_range", range_of(sym("integer")))?;

    rules.define(
        "float_range",
        choice([
            sym("_float_range"),
            alias(
                choice([
                    sym("_non_int_decimal"),
                    sym("_trailing_dot_decimal"),
                    sym("integer"),
                ]),
                "decimal",
            ),
        ]),
    )?;

    rules.define(
        "_float_range",
        prec(
            1,
            choice([
                seq([lit(".."), sym("decimal")]),
                seq([
                    alias(sym("_non_int_decimal"), "decimal"),
                    lit(".."),
                    optional(sym("decimal")),
                ]),
                // A bound like `3..` lexes as the trailing-dot decimal
                // `3.` followed by the second dot of the range operator.
                seq([
                    alias(sym("_trailing_dot_decimal"), "decimal"),
                    lit("."),
                    optional(sym("decimal")),
                ]),
            ]),
        ),
    )?;

    rules.define(
        "_non_int_decimal",
        token(choice([
            seq([signed_integer(), lit("."), decimal_digits()]),
            seq([lit("."), decimal_digits()]),
        ])),
    )?;

    rules.define(
        "_trailing_dot_decimal",
        token(prec(-1, seq([signed_integer(), lit(".")]))),
    )?;

    Ok(())
}
