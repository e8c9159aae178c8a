//! Entity selector acceptance.

use crate::matcher::{Matcher, builtin_rules};

#[test]
fn bare_selectors_and_names() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["@a", "@e", "@p", "@r", "@s", "Steve", "Dinnerbone_2"] {
        assert!(m.accepts("entity", input), "entity should accept {input:?}");
    }
    assert!(m.accepts("entity", "01234567-89ab-cdef-0123-456789abcdef"));
    assert!(!m.accepts("entity", "@x"));
}

#[test]
fn predicate_lists() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in [
        "@e[type=!minecraft:pig,limit=5,tag=!foo]",
        "@a[x=1.5,dy=3]",
        "@p[distance=..5,x_rotation=-90..90]",
        "@e[sort=nearest,gamemode=!creative]",
        "@e[name=\"quoted name\"]",
        "@e[name=!bare_name]",
        "@e[predicate=!minecraft:is_baby]",
        "@e[nbt=!{Invulnerable:1b}]",
        "@e[level=1..30]",
    ] {
        assert!(m.accepts("entity", input), "entity should accept {input:?}");
    }
}

#[test]
fn both_prefixes_compose_on_type() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("entity", "@e[type=!#foo:bar]"));
    assert!(m.accepts("entity", "@e[type=#minecraft:skeletons]"));
}

#[test]
fn tag_and_team_accept_the_sole_bang() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("entity", "@s[tag=!]"));
    assert!(m.accepts("entity", "@s[team=!]"));
    assert!(m.accepts("entity", "@e[tag=!,team=x]"));
    assert!(m.accepts("entity", "@e[tag=]"));
    assert!(m.accepts("entity", "@e[tag=foo]"));
}

#[test]
fn scores_and_advancements_nest() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("entity", "@e[scores={kills=1..,deaths=..5}]"));
    assert!(m.accepts("entity", "@a[advancements={story/mine_stone=true}]"));
    assert!(m.accepts(
        "entity",
        "@a[advancements={story/root={crafting_table=true,furnace=false}}]"
    ));
}

#[test]
fn whitespace_is_tolerated_inside_brackets() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("entity", "@e[ limit = 3 , sort = random ]"));
    assert!(m.accepts("entity", "@e[limit=3,]"));
}

#[test]
fn unknown_keys_are_rejected() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(!m.accepts("entity", "@e[foo=bar]"));
    assert!(!m.accepts("entity", "@e[limit=1.5]"));
}
