//! The typed command-tree model.
//!
//! The schema is constructed once from external data and is immutable for
//! the run. Property maps from the document are resolved into
//! [`ArgumentSpec`] variants at load time, so the compiler matches on
//! typed specializations instead of probing an open key-value map.

/// One entry in the command tree: a literal keyword or a typed argument.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandNode {
    /// Literal keyword or typed argument.
    pub kind: NodeKind,
    /// Ordered children, as the document lists them.
    pub children: Vec<(String, CommandNode)>,
    /// Whether a command may legally terminate at this node.
    pub executable: bool,
    /// Continuation spliced in from elsewhere in the tree.
    pub redirect: Option<Redirect>,
}

impl CommandNode {
    /// Returns true if this node can neither end nor continue a command:
    /// no children, no redirect, not executable. Such nodes are schema
    /// errors, surfaced as warnings during compilation.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.children.is_empty() && self.redirect.is_none() && !self.executable
    }
}

/// What a schema node matches.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// The node's own name, as an exact keyword.
    Literal,
    /// A value of the named argument type.
    Argument {
        /// Canonical parser id, e.g. `brigadier:integer`.
        parser: String,
        /// Typed specialization resolved from the node's properties.
        spec: ArgumentSpec,
    },
}

/// A node's continuation when it is defined elsewhere in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// Continue with the whole top-level command set (`execute … run`).
    Root,
    /// Continue with the named top-level command's continuation.
    Command(String),
}

/// Typed argument specialization, validated at schema-load time.
///
/// Replaces ad hoc property probing: the registry matches exhaustively on
/// this enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentSpec {
    /// No specialization consumed; the parser id alone selects the grammar.
    Plain,
    /// String argument with an explicit matching mode.
    String(StringMode),
    /// Numeric range, integer-only or decimal-capable.
    Range {
        /// Whether decimal bounds are permitted.
        decimals: bool,
    },
    /// Registry-qualified resource reference.
    Resource {
        /// The registry the resource must come from, when the document
        /// names one.
        registry: Option<String>,
    },
}

/// How a string argument consumes input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringMode {
    /// A contiguous non-space run.
    Word,
    /// A quoted string, or an unquoted literal token.
    Phrase,
    /// The remainder of the line, verbatim.
    Greedy,
}

/// The root of the command tree: an ordered set of top-level commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandSchema {
    /// Top-level commands in document order.
    pub children: Vec<(String, CommandNode)>,
}

impl CommandSchema {
    /// Looks up a top-level command by name.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&CommandNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }
}
