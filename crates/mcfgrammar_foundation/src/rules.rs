//! Named grammar rules and the rule-set arena.
//!
//! A [`RuleSet`] is an arena of named productions. Names may be declared
//! before their bodies exist, so a rule body can reference a sibling that
//! is still being compiled; this is what makes cyclic redirect graphs
//! terminate structurally. Rules are written exactly once: defining a name
//! twice is an error, and a finished rule set has a body for every
//! declared name.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::expr::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name of a grammar rule.
///
/// Names beginning with `_` are hidden rules: they structure the grammar
/// but do not surface as named nodes in recognizer output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleName(String);

impl RuleName {
    /// Creates a rule name without validating it.
    ///
    /// [`RuleSet::declare`] and [`RuleSet::define`] validate on entry, so
    /// a name that never reaches an arena may be anything.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this names a hidden rule.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.0.starts_with('_')
    }

    /// Returns true if the name is well-formed for an arena.
    ///
    /// Rule names are single identifiers: ASCII alphanumerics, `_` and
    /// `-`. Schema command names flow into rule names, so this is checked
    /// at declaration time rather than construction time.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Stable identifier of a rule inside one [`RuleSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleId(u32);

impl RuleId {
    /// Returns the arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One arena slot: a name, and a body once defined.
#[derive(Clone, Debug)]
struct RuleSlot {
    name: RuleName,
    body: Option<Expr>,
}

/// The write-once arena of named productions.
///
/// Iteration order is declaration order, which keeps the emitted artifact
/// deterministic for a given schema.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    slots: Vec<RuleSlot>,
    index: HashMap<RuleName, RuleId>,
    conflicts: Vec<Vec<RuleName>>,
    extras: Vec<Expr>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward-declares a rule so other bodies may reference it.
    ///
    /// Declaring an already-declared name returns the existing id.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidRuleName`](crate::ErrorKind::InvalidRuleName)
    /// for a malformed name.
    pub fn declare(&mut self, name: impl Into<RuleName>) -> Result<RuleId> {
        let name = name.into();
        if let Some(id) = self.index.get(&name) {
            return Ok(*id);
        }
        if !name.is_valid() {
            return Err(Error::invalid_rule_name(name.as_str()));
        }
        let id = RuleId(u32::try_from(self.slots.len()).expect("rule count fits in u32"));
        self.index.insert(name.clone(), id);
        self.slots.push(RuleSlot { name, body: None });
        Ok(id)
    }

    /// Defines a rule body, declaring the name first if necessary.
    ///
    /// # Errors
    /// Returns [`ErrorKind::DuplicateRule`](crate::ErrorKind::DuplicateRule)
    /// if the name already has a body; rules are written exactly once.
    pub fn define(&mut self, name: impl Into<RuleName>, body: Expr) -> Result<RuleId> {
        let name = name.into();
        let id = self.declare(name.clone())?;
        let slot = &mut self.slots[id.index()];
        if slot.body.is_some() {
            return Err(Error::duplicate_rule(name));
        }
        slot.body = Some(body);
        Ok(id)
    }

    /// Returns the id for a declared name.
    #[must_use]
    pub fn id_of(&self, name: &RuleName) -> Option<RuleId> {
        self.index.get(name).copied()
    }

    /// Returns a defined rule body by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expr> {
        let id = self.index.get(&RuleName::from(name))?;
        self.slots[id.index()].body.as_ref()
    }

    /// Returns true if the name has been declared (body or not).
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.index.contains_key(&RuleName::from(name))
    }

    /// Returns true if the name has a body.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates defined rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleName, &Expr)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.body.as_ref().map(|body| (&slot.name, body)))
    }

    /// Declares a set of rules the recognizer may not be able to
    /// distinguish locally; it resolves them by precedence instead of
    /// reporting an error.
    pub fn add_conflict(&mut self, names: impl IntoIterator<Item = RuleName>) {
        self.conflicts.push(names.into_iter().collect());
    }

    /// The declared conflict groups.
    #[must_use]
    pub fn conflicts(&self) -> &[Vec<RuleName>] {
        &self.conflicts
    }

    /// Tokens ignorable between productions.
    ///
    /// Empty for the command grammar: whitespace is significant and
    /// explicitly threaded through every sequencing point.
    #[must_use]
    pub fn extras(&self) -> &[Expr] {
        &self.extras
    }

    /// Validates that the arena is complete.
    ///
    /// # Errors
    /// - [`ErrorKind::UnfinishedRule`](crate::ErrorKind::UnfinishedRule)
    ///   if any declared name has no body.
    /// - [`ErrorKind::UnknownRuleReference`](crate::ErrorKind::UnknownRuleReference)
    ///   if any body references an undeclared name.
    pub fn finish(&self) -> Result<()> {
        for slot in &self.slots {
            if slot.body.is_none() {
                return Err(Error::unfinished_rule(slot.name.clone()));
            }
        }
        for slot in &self.slots {
            let body = slot.body.as_ref().expect("checked above");
            let mut dangling = None;
            body.visit_symbols(&mut |target| {
                if dangling.is_none() && !self.index.contains_key(target) {
                    dangling = Some(target.clone());
                }
            });
            if let Some(target) = dangling {
                return Err(Error::unknown_rule_reference(slot.name.clone(), target));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct NamedRule {
    name: RuleName,
    body: Expr,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RuleSetRepr {
    rules: Vec<NamedRule>,
    conflicts: Vec<Vec<RuleName>>,
    extras: Vec<Expr>,
}

#[cfg(feature = "serde")]
impl Serialize for RuleSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = RuleSetRepr {
            rules: self
                .iter()
                .map(|(name, body)| NamedRule {
                    name: name.clone(),
                    body: body.clone(),
                })
                .collect(),
            conflicts: self.conflicts.clone(),
            extras: self.extras.clone(),
        };
        repr.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let repr = RuleSetRepr::deserialize(deserializer)?;
        let mut rules = Self::new();
        for rule in repr.rules {
            rules
                .define(rule.name, rule.body)
                .map_err(D::Error::custom)?;
        }
        rules.conflicts = repr.conflicts;
        rules.extras = repr.extras;
        Ok(rules)
    }
}
