//! Coordinate axes, positions, and rotation.

use mcfgrammar_foundation::expr::{field, seq, sym};
use mcfgrammar_foundation::{Result, RuleSet};

use crate::combinators::axis;

pub(crate) fn install(rules: &mut RuleSet) -> Result<()> {
    rules.define("float_axis", axis(sym("decimal"), true))?;
    rules.define("int_axis", axis(sym("integer"), true))?;
    // Rotation axes and angles are world-relative only: no caret.
    rules.define("rot_axis", axis(sym("decimal"), false))?;
    rules.define("angle", axis(sym("decimal"), false))?;

    rules.define(
        "block_pos",
        seq([
            field("x", sym("float_axis")),
            sym("_ws"),
            field("y", sym("float_axis")),
            sym("_ws"),
            field("z", sym("float_axis")),
        ]),
    )?;

    rules.define(
        "column_pos",
        seq([
            field("x", sym("int_axis")),
            sym("_ws"),
            field("y", sym("int_axis")),
        ]),
    )?;

    rules.define(
        "vec2",
        seq([
            field("x", sym("float_axis")),
            sym("_ws"),
            field("y", sym("float_axis")),
        ]),
    )?;

    rules.define(
        "vec3",
        seq([
            field("x", sym("float_axis")),
            sym("_ws"),
            field("y", sym("float_axis")),
            sym("_ws"),
            field("z", sym("float_axis")),
        ]),
    )?;

    rules.define(
        "rotation",
        seq([
            field("pitch", sym("rot_axis")),
            sym("_ws"),
            field("yaw", sym("rot_axis")),
        ]),
    )?;

    Ok(())
}
