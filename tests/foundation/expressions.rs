//! Tests for expression builders and their serialized form.

use mcfgrammar_foundation::Expr;
use mcfgrammar_foundation::expr::{
    alias, blank, choice, field, lit, optional, pattern, prec, seq, sym, token,
};
use proptest::prelude::*;

#[test]
fn builders_produce_the_expected_shapes() {
    assert!(blank().is_blank());
    assert!(matches!(lit("say"), Expr::Literal { .. }));
    assert!(matches!(pattern("\\d+"), Expr::Pattern { .. }));
    assert!(matches!(sym("integer"), Expr::Symbol { .. }));
    assert!(matches!(token(lit("a")), Expr::Token { .. }));
    assert!(matches!(prec(1, lit("a")), Expr::Prec { level: 1, .. }));
}

#[test]
fn serialized_form_is_tagged() {
    let expr = seq([lit("say"), sym("word")]);
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["type"], "SEQ");
    assert_eq!(json["members"][0]["type"], "LITERAL");
    assert_eq!(json["members"][0]["value"], "say");
    assert_eq!(json["members"][1]["type"], "SYMBOL");
    assert_eq!(json["members"][1]["name"], "word");
}

#[test]
fn alias_and_field_serialize_their_labels() {
    let expr = field("x", alias(lit("say"), "command"));
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["type"], "FIELD");
    assert_eq!(json["name"], "x");
    assert_eq!(json["content"]["type"], "ALIAS");
    assert_eq!(json["content"]["name"], "command");
    assert_eq!(json["content"]["named"], true);
}

#[test]
fn expressions_round_trip_through_serde() {
    let expr = choice([
        optional(seq([lit("a"), sym("b")])),
        prec(-1, pattern("[a-z]+")),
    ]);
    let json = serde_json::to_string(&expr).unwrap();
    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
}

fn leaf_expr() -> impl Strategy<Value = Expr> {
    prop_oneof![
        Just(blank()),
        "[a-z]{1,8}".prop_map(lit),
        "[a-z_]{1,8}".prop_map(sym),
    ]
}

proptest! {
    #[test]
    fn singleton_seq_and_choice_collapse(e in leaf_expr()) {
        prop_assert_eq!(seq([e.clone()]), e.clone());
        prop_assert_eq!(choice([e.clone()]), e);
    }

    #[test]
    fn seq_keeps_every_member(members in prop::collection::vec(leaf_expr(), 2..6)) {
        let expr = seq(members.clone());
        if let Expr::Seq { members: kept } = expr {
            prop_assert_eq!(kept, members);
        } else {
            prop_assert!(false, "expected Seq");
        }
    }
}
