//! Warn-and-continue behavior: degraded output, never an abort.

use mcfgrammar_compiler::{ArgumentTypeRegistry, SchemaCompiler};
use mcfgrammar_foundation::Warning;
use mcfgrammar_schema::CommandSchema;

use crate::matcher::Matcher;

#[test]
fn unknown_parser_warns_and_becomes_a_literal() {
    let schema = CommandSchema::from_json_str(
        r#"{
            "type": "root",
            "children": {
                "strange": {
                    "type": "literal",
                    "children": {
                        "thing": {
                            "type": "argument",
                            "parser": "nonexistent:type",
                            "executable": true
                        }
                    }
                },
                "say": {
                    "type": "literal",
                    "children": {
                        "message": {
                            "type": "argument",
                            "parser": "minecraft:message",
                            "executable": true
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap();
    let registry = ArgumentTypeRegistry::builtin();
    let grammar = SchemaCompiler::new(&registry).compile(&schema).unwrap();

    assert_eq!(grammar.warnings.len(), 1);
    assert!(matches!(
        grammar.warnings[0],
        Warning::UnknownParser { ref path, ref parser }
            if path == "strange/thing" && parser == "nonexistent:type"
    ));

    // The node's own name is its accepted literal; the rest of the tree
    // is untouched.
    let m = Matcher::new(&grammar.rules);
    assert!(m.accepts("cmd_line", "strange thing"));
    assert!(!m.accepts("cmd_line", "strange other"));
    assert!(m.accepts("cmd_line", "say still works"));
}

#[test]
fn dead_nodes_warn_but_the_tree_still_compiles() {
    let schema = CommandSchema::from_json_str(
        r#"{
            "type": "root",
            "children": {
                "stub": {"type": "literal"},
                "help": {"type": "literal", "executable": true}
            }
        }"#,
    )
    .unwrap();
    let registry = ArgumentTypeRegistry::builtin();
    let grammar = SchemaCompiler::new(&registry).compile(&schema).unwrap();

    assert_eq!(grammar.warnings.len(), 1);
    assert!(matches!(
        grammar.warnings[0],
        Warning::DeadNode { ref path } if path == "stub"
    ));

    let m = Matcher::new(&grammar.rules);
    assert!(m.accepts("cmd_line", "help"));
}

#[test]
fn warnings_accumulate_across_the_whole_tree() {
    let schema = CommandSchema::from_json_str(
        r#"{
            "type": "root",
            "children": {
                "a": {
                    "type": "literal",
                    "children": {
                        "x": {"type": "argument", "parser": "no:such", "executable": true},
                        "y": {"type": "argument", "parser": "also:missing", "executable": true}
                    }
                },
                "b": {"type": "literal"}
            }
        }"#,
    )
    .unwrap();
    let registry = ArgumentTypeRegistry::builtin();
    let grammar = SchemaCompiler::new(&registry).compile(&schema).unwrap();

    assert_eq!(grammar.warnings.len(), 3);
}
