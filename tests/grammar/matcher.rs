//! A naive backtracking recognizer over an emitted rule set.
//!
//! Test harness only. It enumerates every length an expression can
//! consume at a position, so acceptance tests can assert whole-input
//! matches without generating a real recognizer. Precedence and token
//! boundaries are ignored: this checks language membership, not parse
//! shape.

use std::cell::RefCell;
use std::collections::HashMap;

use mcfgrammar_foundation::expr::blank;
use mcfgrammar_foundation::{Expr, RuleSet};
use regex::Regex;

pub struct Matcher<'a> {
    rules: &'a RuleSet,
    regexes: RefCell<HashMap<String, Regex>>,
}

impl<'a> Matcher<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            regexes: RefCell::new(HashMap::new()),
        }
    }

    /// True if `rule` derives exactly `input`.
    pub fn accepts(&self, rule: &str, input: &str) -> bool {
        let body = self
            .rules
            .get(rule)
            .unwrap_or_else(|| panic!("rule {rule} not defined"));
        self.ends(body, input, 0).contains(&input.len())
    }

    /// Every position at which `expr` can stop consuming, starting at `pos`.
    fn ends(&self, expr: &Expr, input: &str, pos: usize) -> Vec<usize> {
        match expr {
            Expr::Blank => vec![pos],
            Expr::Literal { value } => {
                if input[pos..].starts_with(value.as_str()) {
                    vec![pos + value.len()]
                } else {
                    Vec::new()
                }
            }
            Expr::Pattern { value } => self.pattern_ends(value, input, pos),
            Expr::Symbol { name } => {
                let body = self
                    .rules
                    .get(name.as_str())
                    .unwrap_or_else(|| panic!("rule {name} not defined"));
                self.ends(body, input, pos)
            }
            Expr::Seq { members } => {
                let mut positions = vec![pos];
                for member in members {
                    let mut next = Vec::new();
                    for p in positions {
                        for e in self.ends(member, input, p) {
                            if !next.contains(&e) {
                                next.push(e);
                            }
                        }
                    }
                    if next.is_empty() {
                        return Vec::new();
                    }
                    positions = next;
                }
                positions
            }
            Expr::Choice { members } => {
                let mut all = Vec::new();
                for member in members {
                    for e in self.ends(member, input, pos) {
                        if !all.contains(&e) {
                            all.push(e);
                        }
                    }
                }
                all
            }
            Expr::Optional { content } => {
                let mut all = self.ends(content, input, pos);
                if !all.contains(&pos) {
                    all.push(pos);
                }
                all
            }
            Expr::Repeat { content } => self.repeat_ends(content, input, pos, true),
            Expr::Repeat1 { content } => self.repeat_ends(content, input, pos, false),
            Expr::Token { content }
            | Expr::Alias { content, .. }
            | Expr::Field { content, .. }
            | Expr::Prec { content, .. }
            | Expr::PrecLeft { content, .. } => self.ends(content, input, pos),
        }
    }

    fn repeat_ends(&self, content: &Expr, input: &str, pos: usize, allow_zero: bool) -> Vec<usize> {
        let mut reached = if allow_zero { vec![pos] } else { Vec::new() };
        let mut frontier = vec![pos];
        while let Some(p) = frontier.pop() {
            for e in self.ends(content, input, p) {
                if e > p && !reached.contains(&e) {
                    reached.push(e);
                    frontier.push(e);
                } else if e == p && !reached.contains(&p) {
                    // One zero-width iteration satisfies repeat1.
                    reached.push(p);
                }
            }
        }
        reached
    }

    fn pattern_ends(&self, pat: &str, input: &str, pos: usize) -> Vec<usize> {
        let mut regexes = self.regexes.borrow_mut();
        let regex = regexes.entry(pat.to_string()).or_insert_with(|| {
            Regex::new(&format!("^(?:{pat})$"))
                .unwrap_or_else(|e| panic!("bad pattern {pat}: {e}"))
        });

        let rest = &input[pos..];
        let mut ends = Vec::new();
        if regex.is_match("") {
            ends.push(pos);
        }
        for end in 1..=rest.len() {
            if rest.is_char_boundary(end) && regex.is_match(&rest[..end]) {
                ends.push(pos + end);
            }
        }
        ends
    }
}

/// A rule set with every builtin installed and a blank entry production,
/// for tests that exercise the builtins without a compiled schema.
#[allow(dead_code)]
pub fn builtin_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    mcfgrammar_builtins::install(&mut rules).unwrap();
    rules.define("cmd_line", blank()).unwrap();
    rules
}
