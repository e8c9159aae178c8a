//! Resource location acceptance.

use crate::matcher::{Matcher, builtin_rules};

#[test]
fn bare_and_namespaced_ids() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["stone", "minecraft:stone", "foo:bar/baz", "my_pack:deep/path.x"] {
        assert!(
            m.accepts("resource_location", input),
            "resource_location should accept {input:?}"
        );
    }
}

#[test]
fn namespace_or_id_may_be_elided_around_the_colon() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("resource_location", "minecraft:"));
    assert!(m.accepts("resource_location", ":stone"));
    assert!(m.accepts("resource_location", ":"));
}

#[test]
fn plain_identifier_takes_no_prefixes() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(!m.accepts("resource_location", "#minecraft:planks"));
    assert!(!m.accepts("resource_location", "!minecraft:pig"));
}

#[test]
fn function_references_allow_the_tag_prefix() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("function", "#minecraft:planks"));
    assert!(m.accepts("function", "my:func"));
    assert!(!m.accepts("function", "!my:func"));
}

#[test]
fn uppercase_is_not_an_id() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(!m.accepts("resource_location", "Stone"));
}

#[test]
fn constant_particle_ids_spell_both_forms() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("_crl_dust", "dust"));
    assert!(m.accepts("_crl_dust", "minecraft:dust"));
    assert!(m.accepts("_crl_block", "falling_dust"));
    assert!(!m.accepts("_crl_dust", "smoke"));
}
