//! Entity selectors: a sigil with an optional bracketed predicate list.
//!
//! Every recognized predicate key carries its own value grammar. The
//! `tag`/`team` pair is a deliberate special case: the value may be
//! wholly absent or the sole symbol `!`, and it must not be merged with
//! the general negatable-value pattern.

use mcfgrammar_foundation::expr::{alias, choice, field, lit, optional, pattern, seq, sym};
use mcfgrammar_foundation::{Expr, Result, RuleSet};

use crate::combinators::{comma_sep, negatable, pair, tagged, ws_opt};

/// A predicate pair whose key surfaces as `entity_var_key`.
fn selector_pair(key: Expr, value: Expr) -> Expr {
    pair(alias(key, "entity_var_key"), lit("="), value)
}

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "entity",
        choice([sym("entity_variable"), sym("uuid"), sym("player_name")]),
    )?;

    rules.define(
        "entity_variable",
        seq([sym("entity_var_type"), optional(sym("entity_argument"))]),
    )?;

    rules.define(
        "entity_var_type",
        seq([
            lit("@"),
            choice([lit("a"), lit("e"), lit("p"), lit("r"), lit("s")]),
        ]),
    )?;

    rules.define(
        "entity_argument",
        seq([lit("["), comma_sep(sym("entity_argument_pair")), lit("]")]),
    )?;

    rules.define(
        "entity_argument_pair",
        choice([
            selector_pair(
                choice([lit("x"), lit("y"), lit("z"), lit("dx"), lit("dy"), lit("dz")]),
                sym("decimal"),
            ),
            selector_pair(
                choice([lit("distance"), lit("x_rotation"), lit("y_rotation")]),
                sym("float_range"),
            ),
            selector_pair(lit("limit"), sym("integer")),
            selector_pair(lit("level"), sym("int_range")),
            selector_pair(lit("predicate"), negatable(sym("resource_location"))),
            selector_pair(
                lit("sort"),
                choice([
                    lit("nearest"),
                    lit("furthest"),
                    lit("random"),
                    lit("arbitrary"),
                ]),
            ),
            selector_pair(
                lit("gamemode"),
                negatable(choice([
                    lit("adventure"),
                    lit("creative"),
                    lit("spectator"),
                    lit("survival"),
                ])),
            ),
            selector_pair(
                lit("name"),
                negatable(choice([sym("quoted_string"), pattern("[0-9a-zA-Z_-]+")])),
            ),
            selector_pair(lit("type"), negatable(tagged(sym("resource_location")))),
            selector_pair(lit("nbt"), negatable(sym("snbt_compound"))),
            sym("_entity_argument_tag_team"),
            selector_pair(lit("scores"), sym("entity_argument_scores")),
            selector_pair(lit("advancements"), sym("entity_argument_advancements")),
        ]),
    )?;

    // `tag=` and `team=` accept an empty value, the sole `!` (has no
    // tag/team at all), or a negatable bare string.
    rules.define(
        "_entity_argument_tag_team",
        seq([
            field("key", alias(choice([lit("tag"), lit("team")]), "entity_var_key")),
            ws_opt(),
            lit("="),
            optional(seq([
                ws_opt(),
                field("value", choice([lit("!"), negatable(sym("literal_string"))])),
            ])),
        ]),
    )?;

    rules.define(
        "entity_argument_scores",
        seq([
            lit("{"),
            comma_sep(pair(sym("key"), lit("="), sym("int_range"))),
            lit("}"),
        ]),
    )?;

    rules.define(
        "entity_argument_advancements",
        seq([
            lit("{"),
            comma_sep(pair(
                sym("key"),
                lit("="),
                choice([
                    sym("true"),
                    sym("false"),
                    seq([
                        lit("{"),
                        comma_sep(pair(
                            sym("key"),
                            lit("="),
                            choice([sym("true"), sym("false")]),
                        )),
                        lit("}"),
                    ]),
                ]),
            )),
            lit("}"),
        ]),
    )?;

    Ok(())
}
