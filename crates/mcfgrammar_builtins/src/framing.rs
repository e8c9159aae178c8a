//! Command-file framing: lines, comments, and the declared grammar
//! conflicts.
//!
//! A file is a sequence of lines; the final line need not end with a line
//! break. A line may be blank, a comment, or a command with optional
//! leading horizontal whitespace and optional trailing whitespace after
//! the last token. `cmd_line` itself is only declared here; the schema
//! compiler defines it from the command tree.

use mcfgrammar_foundation::RuleName;
use mcfgrammar_foundation::expr::{choice, lit, optional, pattern, repeat, seq, sym};
use mcfgrammar_foundation::{Result, RuleSet};

use crate::combinators::ws_opt;

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "file",
        seq([
            repeat(seq([optional(sym("_line")), sym("_nl")])),
            sym("_line"),
        ]),
    )?;

    rules.define(
        "_line",
        seq([
            pattern("[ \\t]*"),
            optional(choice([sym("_cmd_line"), sym("comment")])),
        ]),
    )?;

    rules.define("_cmd_line", seq([sym("cmd_line"), ws_opt()]))?;

    rules.declare("cmd_line")?;

    rules.define("comment", seq([lit("#"), pattern(".*")]))?;

    // Ambiguities the recognizer resolves by precedence, not error: the
    // tag/team pair with its absent value, and a bare namespace versus a
    // constant resource id.
    rules.add_conflict([RuleName::from("_entity_argument_tag_team")]);
    rules.add_conflict(
        [
            "namespace",
            "_crl_block",
            "_crl_dust",
            "_crl_dust_color_transition",
            "_crl_item",
            "_crl_sculk_charge",
            "_crl_shriek",
            "_crl_vibration",
        ]
        .map(RuleName::from),
    );

    Ok(())
}
