//! The schema compiler.
//!
//! Walks the command tree depth-first and emits one named production per
//! top-level command continuation, plus the `cmd_line` entry production.
//! Continuations are always references to named rules, never re-expanded
//! trees, so a redirect cycle (a command whose continuation eventually
//! loops back to itself) terminates structurally: the referenced name is
//! forward-declared before any body that mentions it is built.

use mcfgrammar_foundation::expr::{alias, choice, lit, optional, seq, sym};
use mcfgrammar_foundation::{Expr, Result, RuleSet, Warning};
use mcfgrammar_schema::{CommandNode, CommandSchema, NodeKind, Redirect};

use serde::{Deserialize, Serialize};

use crate::context::CompileContext;
use crate::registry::ArgumentTypeRegistry;

/// Name of the language the emitted rule set recognizes.
pub const GRAMMAR_NAME: &str = "mcfunction";

/// The sole output artifact: the named rule set, its declared conflicts
/// and (empty) extras, and every warning the compile accumulated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompiledGrammar {
    /// Grammar name for the recognizer generator.
    pub name: String,
    /// Every named production, in emission order.
    pub rules: RuleSet,
    /// Recoverable conditions encountered while compiling.
    pub warnings: Vec<Warning>,
}

/// Compiles a command schema into a grammar rule set.
pub struct SchemaCompiler<'a> {
    registry: &'a ArgumentTypeRegistry,
}

impl<'a> SchemaCompiler<'a> {
    /// Creates a compiler over a frozen registry.
    #[must_use]
    pub fn new(registry: &'a ArgumentTypeRegistry) -> Self {
        Self { registry }
    }

    /// Compiles the schema. Single pass, deterministic; never aborts on a
    /// recoverable schema problem.
    ///
    /// # Errors
    /// Hard failures only: invalid rule names flowing from command names,
    /// redirects naming commands that do not exist, or an arena invariant
    /// violation. Unknown parsers and dead nodes degrade to warnings.
    pub fn compile(&self, schema: &CommandSchema) -> Result<CompiledGrammar> {
        let mut rules = RuleSet::new();
        mcfgrammar_builtins::install(&mut rules)?;

        let mut ctx = CompileContext::new(self.registry);

        // Forward-declare every top-level continuation so redirects can
        // reference commands that compile later (or cyclically).
        for (name, node) in &schema.children {
            if !node.children.is_empty() {
                rules.declare(continuation_name(name))?;
            }
        }

        // The entry production: one command line's command portion.
        let mut alternatives = Vec::with_capacity(schema.children.len());
        for (name, node) in &schema.children {
            alternatives.push(self.compile_node(&mut ctx, node, name, 1, name)?);
        }
        rules.define("cmd_line", choice(alternatives))?;

        // The hoisted continuation rule for each top-level command.
        for (name, node) in &schema.children {
            if node.children.is_empty() {
                continue;
            }
            let mut continuations = Vec::with_capacity(node.children.len());
            for (child_name, child) in &node.children {
                let path = format!("{name}/{child_name}");
                continuations.push(self.compile_node(&mut ctx, child, child_name, 2, &path)?);
            }
            rules.define(continuation_name(name), choice(continuations))?;
        }

        rules.finish()?;

        Ok(CompiledGrammar {
            name: GRAMMAR_NAME.to_string(),
            rules,
            warnings: ctx.into_warnings(),
        })
    }

    /// Compiles one schema node into the expression for "this node and
    /// everything that may follow it".
    fn compile_node(
        &self,
        ctx: &mut CompileContext<'a>,
        node: &CommandNode,
        name: &str,
        depth: u32,
        path: &str,
    ) -> Result<Expr> {
        let head = match &node.kind {
            // The depth-1/depth-n distinction is part of the output
            // contract: highlighters tell command names from nested
            // keywords by it.
            NodeKind::Literal => alias(
                lit(name),
                if depth == 1 { "command" } else { "subcommand" },
            ),
            NodeKind::Argument { parser, spec } => {
                match ctx.registry().resolve(parser, spec) {
                    Some(fragment) => fragment,
                    None => {
                        ctx.warn(Warning::UnknownParser {
                            path: path.to_string(),
                            parser: parser.clone(),
                        });
                        alias(lit(name), name)
                    }
                }
            }
        };

        let continuation = if node.children.is_empty() {
            match &node.redirect {
                // Redirects splice in the target's argument continuation,
                // never its root literal.
                Some(Redirect::Command(target)) => Some(sym(continuation_name(target))),
                Some(Redirect::Root) => Some(sym("cmd_line")),
                None => {
                    if !node.executable {
                        ctx.warn(Warning::DeadNode {
                            path: path.to_string(),
                        });
                    }
                    None
                }
            }
        } else if depth == 1 {
            Some(sym(continuation_name(name)))
        } else {
            let mut continuations = Vec::with_capacity(node.children.len());
            for (child_name, child) in &node.children {
                let child_path = format!("{path}/{child_name}");
                continuations.push(self.compile_node(
                    ctx,
                    child,
                    child_name,
                    depth + 1,
                    &child_path,
                )?);
            }
            Some(choice(continuations))
        };

        Ok(match continuation {
            Some(continuation) if node.executable => seq([
                head,
                optional(seq([sym("_ws"), optional(continuation)])),
            ]),
            Some(continuation) => seq([head, sym("_ws"), continuation]),
            None => head,
        })
    }
}

/// Name of a top-level command's hoisted continuation rule.
fn continuation_name(command: &str) -> String {
    format!("{command}_cmd")
}
