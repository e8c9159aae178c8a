//! Structured tag value acceptance.

use crate::matcher::{Matcher, builtin_rules};

#[test]
fn compounds() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in [
        "{}",
        "{a:1}",
        "{a:1b,b:\"text\"}",
        "{CustomName:'quoted',Count:3s}",
        "{a:1,}",
        "{ a : 1 , b : 2 }",
    ] {
        assert!(
            m.accepts("snbt_compound", input),
            "snbt_compound should accept {input:?}"
        );
    }
}

#[test]
fn nesting_is_unbounded() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts(
        "snbt_compound",
        "{list:[1,2,3],arr:[I;1,2],nested:{x:0.5f,deeper:{flag:true}}}"
    ));
}

#[test]
fn arrays_require_the_type_tag_lists_forbid_it() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("snbt_array", "[B;1b,2b]"));
    assert!(m.accepts("snbt_array", "[L;1,2,3]"));
    assert!(!m.accepts("snbt_array", "[1,2,3]"));
    assert!(m.accepts("snbt_list", "[1,2,3]"));
    assert!(m.accepts("snbt_list", "[]"));
    assert!(!m.accepts("snbt_array", "[X;1]"));
}

#[test]
fn scalars_take_type_suffixes() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["1", "1b", "-3.5f", "2.0d", "100L", ".5s"] {
        assert!(
            m.accepts("snbt_number", input),
            "snbt_number should accept {input:?}"
        );
    }
    assert!(!m.accepts("snbt_number", "1x"));
}

#[test]
fn malformed_pairs_are_rejected() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(!m.accepts("snbt_compound", "{a}"));
    assert!(!m.accepts("snbt_compound", "{a:}"));
    assert!(!m.accepts("snbt_compound", "{:1}"));
}
