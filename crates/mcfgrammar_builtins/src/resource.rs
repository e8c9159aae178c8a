//! Resource locations: `[namespace:]id`, and the constant resource ids
//! built-in particles use.

use mcfgrammar_foundation::expr::{alias, choice, field, lit, optional, pattern, seq, sym};
use mcfgrammar_foundation::{Expr, Result, RuleSet};

/// The constant resource ids referenced by the particle grammar. The
/// first spelling of each group names the hidden rule.
pub(crate) const CONSTANT_IDS: &[&[&str]] = &[
    &["block", "block_marker", "falling_dust"],
    &["dust"],
    &["dust_color_transition"],
    &["item"],
    &["sculk_charge"],
    &["shriek"],
    &["vibration"],
];

/// A reference to a constant resource id, presented as a
/// `resource_location` to consumers.
#[must_use]
pub fn constant_id(id: &str) -> Expr {
    alias(sym(format!("_crl_{id}")), "resource_location")
}

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "resource_location",
        choice([
            field("id", alias(sym("namespace"), "id")),
            field("id", sym("id")),
            seq([
                optional(field("namespace", sym("namespace"))),
                lit(":"),
                optional(field("id", sym("id"))),
            ]),
        ]),
    )?;

    rules.define(
        "namespace",
        choice([sym("_ns_minecraft"), pattern("[0-9a-z_\\\\.-]+")]),
    )?;
    rules.define("_ns_minecraft", lit("minecraft"))?;
    rules.define("id", pattern("[0-9a-z_\\\\/.-]+"))?;

    for group in CONSTANT_IDS {
        let head = group[0];
        rules.define(
            format!("_crl_{head}"),
            seq([
                optional(seq([
                    optional(field(
                        "namespace",
                        alias(sym("_ns_minecraft"), "namespace"),
                    )),
                    lit(":"),
                ])),
                field(
                    "id",
                    alias(choice(group.iter().map(|id| lit(*id))), "id"),
                ),
            ]),
        )?;
    }

    Ok(())
}
