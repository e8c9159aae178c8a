//! Numeric range acceptance.

use crate::matcher::{Matcher, builtin_rules};

#[test]
fn integer_ranges() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["5", "..5", "5..", "3..5", "-2..7", "+3"] {
        assert!(m.accepts("int_range", input), "int_range should accept {input:?}");
    }
}

#[test]
fn integer_range_rejects_decimals_and_bare_dots() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["3.5", "..", "3...5", "a..b", ""] {
        assert!(
            !m.accepts("int_range", input),
            "int_range should reject {input:?}"
        );
    }
}

#[test]
fn decimal_ranges() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["3.5..7.2", "..2.5", "1.5..", "3..5", "5", "3..", "..5", ".5..2."] {
        assert!(
            m.accepts("float_range", input),
            "float_range should accept {input:?}"
        );
    }
}

#[test]
fn decimal_range_accepts_bare_decimals() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["3.5", "3.", ".5", "7"] {
        assert!(
            m.accepts("float_range", input),
            "float_range should accept {input:?}"
        );
    }
}

#[test]
fn open_high_range_never_strands_a_dot() {
    // `3..` must read as a range with an open high end; if the trailing
    // dot consumed as a decimal there would be a stray `.` left over and
    // the whole input would not match.
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    assert!(m.accepts("float_range", "3.."));
    assert!(!m.accepts("float_range", "3..."));
}

#[test]
fn decimal_range_rejects_garbage() {
    let rules = builtin_rules();
    let m = Matcher::new(&rules);

    for input in ["..", "x..y", "1..2..3", ""] {
        assert!(
            !m.accepts("float_range", input),
            "float_range should reject {input:?}"
        );
    }
}
