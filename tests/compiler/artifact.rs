//! The emitted artifact: serialized shape and stability.

use mcfgrammar_compiler::{ArgumentTypeRegistry, CompiledGrammar, SchemaCompiler};
use mcfgrammar_schema::CommandSchema;

fn tiny() -> CompiledGrammar {
    let schema = CommandSchema::from_json_str(
        r#"{
            "type": "root",
            "children": {
                "seed": {"type": "literal", "executable": true}
            }
        }"#,
    )
    .unwrap();
    let registry = ArgumentTypeRegistry::builtin();
    SchemaCompiler::new(&registry).compile(&schema).unwrap()
}

#[test]
fn artifact_carries_name_rules_conflicts_and_extras() {
    let json = serde_json::to_value(tiny()).unwrap();

    assert_eq!(json["name"], "mcfunction");
    assert!(json["rules"]["rules"].as_array().unwrap().len() > 40);
    assert_eq!(json["rules"]["conflicts"].as_array().unwrap().len(), 2);
    // Whitespace is significant: nothing is ignorable between productions.
    assert_eq!(json["rules"]["extras"].as_array().unwrap().len(), 0);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn artifact_round_trips_through_serde() {
    let grammar = tiny();
    let json = serde_json::to_value(&grammar).unwrap();
    let back: CompiledGrammar = serde_json::from_value(json.clone()).unwrap();
    let again = serde_json::to_value(&back).unwrap();
    assert_eq!(json, again);
}

#[test]
fn compilation_is_deterministic() {
    let a = serde_json::to_value(tiny()).unwrap();
    let b = serde_json::to_value(tiny()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_reference_in_the_artifact_resolves() {
    let grammar = tiny();
    grammar.rules.finish().unwrap();
}
