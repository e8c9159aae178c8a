//! Remaining argument value grammars: blocks, items, colors, slots, NBT
//! paths, particles, scoreboard shapes, time, and the small closed
//! enumerations.

use mcfgrammar_foundation::expr::{
    alias, choice, field, lit, optional, pattern, prec_left, repeat, seq, sym,
};
use mcfgrammar_foundation::{Result, RuleSet};

use crate::combinators::{comma_sep, pair, tagged, ws_opt};
use crate::resource::constant_id;

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "block",
        seq([
            field("block", sym("resource_location")),
            optional(field("states", sym("block_states"))),
            optional(field("nbt", sym("snbt_compound"))),
        ]),
    )?;

    rules.define(
        "block_states",
        seq([lit("["), comma_sep(sym("block_state_pair")), lit("]")]),
    )?;

    rules.define(
        "block_state_pair",
        pair(sym("literal_string"), lit("="), sym("literal_string")),
    )?;

    rules.define(
        "item",
        seq([
            field("item", sym("resource_location")),
            optional(field("nbt", sym("snbt_compound"))),
        ]),
    )?;

    rules.define(
        "color",
        choice([
            lit("aqua"),
            lit("black"),
            lit("blue"),
            lit("dark_aqua"),
            lit("dark_blue"),
            lit("dark_green"),
            lit("dark_gray"),
            lit("dark_purple"),
            lit("dark_red"),
            lit("gold"),
            lit("green"),
            lit("gray"),
            lit("light_purple"),
            lit("red"),
            lit("white"),
            lit("yellow"),
        ]),
    )?;

    rules.define("entity_anchor", choice([lit("eyes"), lit("feet")]))?;

    rules.define(
        "item_slot",
        choice([
            sym("integer"),
            lit("armor.chest"),
            lit("armor.feet"),
            lit("armor.head"),
            lit("armor.legs"),
            lit("weapon.mainhand"),
            lit("weapon.offhand"),
            lit("weapon"),
            seq([lit("container."), sym("integer")]),
            seq([lit("enderchest."), sym("integer")]),
            seq([lit("hotbar."), sym("integer")]),
            seq([lit("inventory."), sym("integer")]),
            lit("horse.saddle"),
            lit("horse.chest"),
            lit("horse.armor"),
            seq([lit("horse."), sym("integer")]),
            seq([lit("villager."), sym("integer")]),
        ]),
    )?;

    rules.define("objective", pattern("[0-9a-zA-Z+_.-]+"))?;
    rules.define("objective_criteria", pattern("[0-9a-zA-Z_.:-]+"))?;

    rules.define(
        "operation",
        choice([
            lit("="),
            lit("<"),
            lit(">"),
            lit("><"),
            lit("+="),
            lit("-="),
            lit("*="),
            lit("/="),
            lit("%="),
        ]),
    )?;

    install_nbt_path(rules)?;
    install_particle(rules)?;

    rules.define(
        "scoreboard_slot",
        choice([
            lit("list"),
            lit("sidebar"),
            lit("belowName"),
            seq([lit("sidebar.team."), sym("color")]),
        ]),
    )?;

    rules.define(
        "swizzle",
        choice([
            pattern("xy?z?"),
            pattern("yz?x?"),
            pattern("zx?y?"),
            lit("xzy"),
            lit("yxz"),
            lit("zyx"),
        ]),
    )?;

    rules.define(
        "template_mirror",
        choice([lit("none"), lit("front_back"), lit("left_right")]),
    )?;

    rules.define(
        "template_rotation",
        choice([
            lit("none"),
            lit("clockwise_90"),
            lit("counterclockwise_90"),
            lit("180"),
        ]),
    )?;

    rules.define(
        "time",
        seq([
            field("time", sym("integer")),
            optional(field("unit", sym("time_unit"))),
        ]),
    )?;
    rules.define("time_unit", choice([lit("d"), lit("s"), lit("t")]))?;

    rules.define("function", tagged(sym("resource_location")))?;

    Ok(())
}

/// NBT paths: dot-separated key steps, each step optionally followed by
/// bracket indexes; the first step may also be a bare compound.
fn install_nbt_path(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "nbt_path",
        seq([
            sym("_nbt_path_first_group"),
            repeat(seq([lit("."), sym("_nbt_path_group")])),
        ]),
    )?;

    rules.define(
        "_nbt_path_first_group",
        prec_left(seq([
            sym("_nbt_path_first_step"),
            repeat(seq([optional(lit(".")), sym("nbt_path_index")])),
        ])),
    )?;

    rules.define(
        "_nbt_path_first_step",
        choice([sym("nbt_path_key"), sym("snbt_compound")]),
    )?;

    rules.define(
        "_nbt_path_group",
        prec_left(seq([
            sym("_nbt_path_step"),
            repeat(seq([optional(lit(".")), sym("nbt_path_index")])),
        ])),
    )?;

    rules.define(
        "_nbt_path_step",
        choice([sym("nbt_path_key"), sym("nbt_path_index")]),
    )?;

    rules.define(
        "nbt_path_index",
        seq([
            lit("["),
            ws_opt(),
            optional(choice([sym("snbt_compound"), sym("integer")])),
            ws_opt(),
            lit("]"),
        ]),
    )?;

    rules.define(
        "nbt_path_key",
        seq([sym("_nbt_path_key"), optional(sym("snbt_compound"))]),
    )?;

    rules.define(
        "_nbt_path_key",
        choice([
            sym("quoted_string"),
            alias(pattern("[0-9a-zA-Z_+-]+"), "literal_string"),
        ]),
    )?;

    Ok(())
}

/// Particles: a plain resource location, or one of the built-in particle
/// ids followed by its typed trailing arguments.
fn install_particle(rules: &mut RuleSet) -> Result<()> {
    rules.define(
        "particle",
        choice([
            sym("resource_location"),
            seq([
                constant_id("block"),
                sym("_ws"),
                sym("resource_location"),
                optional(sym("block_states")),
            ]),
            seq([
                constant_id("dust"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
            ]),
            seq([
                constant_id("dust_color_transition"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
                sym("_ws"),
                sym("decimal"),
            ]),
            seq([constant_id("item"), sym("_ws"), sym("item")]),
            seq([constant_id("sculk_charge"), sym("_ws"), sym("decimal")]),
            seq([constant_id("shriek"), sym("_ws"), sym("integer")]),
            seq([
                constant_id("vibration"),
                sym("_ws"),
                sym("vec3"),
                sym("_ws"),
                sym("decimal"),
            ]),
        ]),
    )?;

    Ok(())
}
