//! Schema loading and load-time validation.
//!
//! Deserializes the `commands.json` document shape into raw mirror
//! structs, then converts them into the typed model, resolving property
//! maps into [`ArgumentSpec`] variants. Children stay in document order
//! (`serde_json` is built with `preserve_order`).

use mcfgrammar_foundation::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::{ArgumentSpec, CommandNode, CommandSchema, NodeKind, Redirect, StringMode};

/// Raw mirror of one document node. This is the sole input contract with
/// the schema-producing collaborator.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    parser: Option<String>,
    properties: Option<Map<String, Value>>,
    children: Option<Map<String, Value>>,
    executable: Option<bool>,
    redirect: Option<Vec<String>>,
}

impl CommandSchema {
    /// Loads a schema from JSON text.
    ///
    /// # Errors
    /// Returns a [`Json`](mcfgrammar_foundation::ErrorKind::Json) error
    /// for malformed JSON, and [`Schema`](mcfgrammar_foundation::ErrorKind::Schema)
    /// or [`InvalidProperty`](mcfgrammar_foundation::ErrorKind::InvalidProperty)
    /// errors for documents that violate the input contract.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| Error::json(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Loads a schema from an already-parsed JSON document.
    ///
    /// # Errors
    /// Same contract as [`CommandSchema::from_json_str`].
    pub fn from_json_value(value: Value) -> Result<Self> {
        let root: RawNode = deserialize_node(value, "")?;
        if root.kind != "root" {
            return Err(Error::schema(format!(
                "root node must have type \"root\", got {:?}",
                root.kind
            )));
        }
        let children = convert_children(root.children, "")?;
        Ok(Self { children })
    }
}

fn deserialize_node(value: Value, path: &str) -> Result<RawNode> {
    serde_json::from_value(value).map_err(|e| Error::json(e.to_string()).with_path(path))
}

fn convert_children(
    children: Option<Map<String, Value>>,
    path: &str,
) -> Result<Vec<(String, CommandNode)>> {
    let Some(children) = children else {
        return Ok(Vec::new());
    };
    let mut converted = Vec::with_capacity(children.len());
    for (name, value) in children {
        let child_path = join_path(path, &name);
        let raw = deserialize_node(value, &child_path)?;
        let node = convert_node(raw, &child_path)?;
        converted.push((name, node));
    }
    Ok(converted)
}

fn convert_node(raw: RawNode, path: &str) -> Result<CommandNode> {
    let kind = match raw.kind.as_str() {
        "literal" => NodeKind::Literal,
        "argument" => {
            let parser = raw.parser.ok_or_else(|| {
                Error::schema("argument node missing parser").with_path(path.to_string())
            })?;
            let spec = resolve_spec(&parser, raw.properties.as_ref())
                .map_err(|e| e.with_path(path.to_string()))?;
            NodeKind::Argument { parser, spec }
        }
        other => {
            return Err(
                Error::schema(format!("unknown node type {other:?}")).with_path(path.to_string())
            );
        }
    };

    let redirect = match raw.redirect {
        None => None,
        Some(targets) if targets.is_empty() => Some(Redirect::Root),
        Some(targets) if targets.len() == 1 => {
            Some(Redirect::Command(targets.into_iter().next().expect("length checked")))
        }
        Some(targets) => {
            return Err(Error::schema(format!(
                "multi-segment redirect {targets:?} not supported"
            ))
            .with_path(path.to_string()));
        }
    };

    Ok(CommandNode {
        kind,
        children: convert_children(raw.children, path)?,
        executable: raw.executable.unwrap_or(false),
        redirect,
    })
}

/// Resolves a node's property map into a typed specialization.
///
/// Only three parser families consume properties; everything else loads as
/// [`ArgumentSpec::Plain`], including parser ids the registry will not
/// recognize (recoverability is the compiler's decision, not the loader's).
fn resolve_spec(parser: &str, properties: Option<&Map<String, Value>>) -> Result<ArgumentSpec> {
    match parser {
        "brigadier:string" => {
            let mode = properties
                .and_then(|props| props.get("type"))
                .and_then(Value::as_str)
                .ok_or_else(|| Error::invalid_property(parser, "missing string match mode"))?;
            let mode = match mode {
                "word" => StringMode::Word,
                "phrase" => StringMode::Phrase,
                "greedy" => StringMode::Greedy,
                other => {
                    return Err(Error::invalid_property(
                        parser,
                        format!("unknown string match mode {other:?}"),
                    ));
                }
            };
            Ok(ArgumentSpec::String(mode))
        }
        "minecraft:range" => {
            let decimals = match properties.and_then(|props| props.get("decimals")) {
                None => false,
                Some(Value::Bool(b)) => *b,
                Some(other) => {
                    return Err(Error::invalid_property(
                        parser,
                        format!("decimals must be a boolean, got {other}"),
                    ));
                }
            };
            Ok(ArgumentSpec::Range { decimals })
        }
        "minecraft:resource" | "minecraft:resource_or_tag" => {
            let registry = match properties.and_then(|props| props.get("registry")) {
                None => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => {
                    return Err(Error::invalid_property(
                        parser,
                        format!("registry must be a string, got {other}"),
                    ));
                }
            };
            Ok(ArgumentSpec::Resource { registry })
        }
        _ => Ok(ArgumentSpec::Plain),
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
