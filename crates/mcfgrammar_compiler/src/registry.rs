//! The argument type registry.
//!
//! Maps a parser id plus its typed specialization to the grammar fragment
//! used at that schema position. The registry is built once before
//! compilation starts and shared read-only by every compiling call.

use std::collections::HashMap;

use mcfgrammar_builtins::combinators::tagged;
use mcfgrammar_foundation::Expr;
use mcfgrammar_foundation::expr::{alias, choice, lit, sym};
use mcfgrammar_schema::{ArgumentSpec, StringMode};

/// The registry the attribute special case keys on.
const ATTRIBUTE_REGISTRY: &str = "minecraft:attribute";

/// Maps parser ids to grammar fragments.
#[derive(Clone, Debug, Default)]
pub struct ArgumentTypeRegistry {
    fragments: HashMap<String, Expr>,
}

impl ArgumentTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every parser id the vanilla schema uses.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register("brigadier:bool", choice([sym("true"), sym("false")]));
        registry.register("brigadier:double", sym("decimal"));
        registry.register("brigadier:float", sym("decimal"));
        registry.register("brigadier:integer", sym("integer"));

        registry.register("minecraft:angle", sym("angle"));
        registry.register("minecraft:block", sym("block"));
        registry.register("minecraft:block_pos", sym("block_pos"));
        registry.register("minecraft:block_predicate", tagged(sym("block")));
        registry.register("minecraft:block_state", sym("block"));
        registry.register("minecraft:color", choice([sym("color"), lit("reset")]));
        registry.register("minecraft:column_pos", sym("column_pos"));
        registry.register("minecraft:component", sym("component"));
        registry.register("minecraft:dimension", sym("resource_location"));
        registry.register("minecraft:entity", sym("entity"));
        registry.register("minecraft:entity_anchor", sym("entity_anchor"));
        registry.register("minecraft:entity_summon", sym("resource_location"));
        registry.register("minecraft:float_range", sym("float_range"));
        registry.register("minecraft:function", sym("function"));
        registry.register("minecraft:game_profile", sym("entity"));
        registry.register("minecraft:int_range", sym("int_range"));
        registry.register("minecraft:item", sym("item"));
        registry.register("minecraft:item_enchantment", sym("resource_location"));
        registry.register("minecraft:item_predicate", tagged(sym("item")));
        registry.register("minecraft:item_slot", sym("item_slot"));
        registry.register("minecraft:item_stack", sym("item"));
        registry.register("minecraft:message", sym("remaining_string"));
        registry.register("minecraft:mob_effect", sym("resource_location"));
        registry.register("minecraft:nbt", sym("snbt_compound"));
        registry.register("minecraft:nbt_compound_tag", sym("snbt_compound"));
        registry.register("minecraft:nbt_path", sym("nbt_path"));
        registry.register("minecraft:nbt_tag", sym("_snbt_value"));
        registry.register("minecraft:objective", sym("objective"));
        registry.register("minecraft:objective_criteria", sym("objective_criteria"));
        registry.register("minecraft:operation", sym("operation"));
        registry.register("minecraft:particle", sym("particle"));
        registry.register("minecraft:resource", sym("resource_location"));
        registry.register("minecraft:resource_location", sym("resource_location"));
        registry.register("minecraft:resource_or_tag", tagged(sym("resource_location")));
        registry.register("minecraft:rotation", sym("rotation"));
        registry.register("minecraft:score_holder", choice([lit("*"), sym("entity")]));
        registry.register("minecraft:scoreboard_slot", sym("scoreboard_slot"));
        registry.register("minecraft:swizzle", sym("swizzle"));
        registry.register("minecraft:team", sym("literal_string"));
        registry.register("minecraft:template_mirror", sym("template_mirror"));
        registry.register("minecraft:template_rotation", sym("template_rotation"));
        registry.register("minecraft:time", sym("time"));
        registry.register("minecraft:uuid", sym("uuid"));
        registry.register("minecraft:vec2", sym("vec2"));
        registry.register("minecraft:vec3", sym("vec3"));

        registry
    }

    /// Registers a fragment for a parser id. Last registration wins; the
    /// registry is frozen once compilation starts.
    pub fn register(&mut self, parser: impl Into<String>, fragment: Expr) {
        self.fragments.insert(parser.into(), fragment);
    }

    /// Returns the fragment to use for a parser id with the given
    /// specialization, or `None` for a parser the registry does not know.
    ///
    /// The caller, not the registry, decides what an unknown parser
    /// means; the compiler treats it as recoverable.
    #[must_use]
    pub fn resolve(&self, parser: &str, spec: &ArgumentSpec) -> Option<Expr> {
        match spec {
            ArgumentSpec::String(mode) => Some(match mode {
                StringMode::Word => sym("word"),
                StringMode::Phrase => choice([sym("quoted_string"), sym("literal_string")]),
                StringMode::Greedy => sym("remaining_string"),
            }),
            ArgumentSpec::Range { decimals } => Some(if *decimals {
                sym("float_range")
            } else {
                sym("int_range")
            }),
            ArgumentSpec::Resource { registry } => {
                let fragment = self.fragments.get(parser)?.clone();
                // Attribute references are aliased so downstream
                // consumers can tell them apart.
                if parser == "minecraft:resource"
                    && registry.as_deref() == Some(ATTRIBUTE_REGISTRY)
                {
                    Some(alias(fragment, "attribute"))
                } else {
                    Some(fragment)
                }
            }
            ArgumentSpec::Plain => self.fragments.get(parser).cloned(),
        }
    }
}
