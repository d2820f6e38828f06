//! Ordered, first-match-wins rule tables.
//!
//! Every extractor in this crate is a priority cascade: a fixed list of regex
//! rules evaluated top to bottom, where the first rule that matches decides the
//! result. This module holds that cascade as data so the order is explicit and
//! each rule can be inspected and tested on its own.

use regex::{Captures, Regex};

/// Static definition of a rule: `(name, pattern, outcome)`.
pub type RuleDef<T> = (&'static str, &'static str, T);

/// A single compiled rule.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    name: &'static str,
    pattern: Regex,
    outcome: T,
}

impl<T: Copy> Rule<T> {
    /// Compile a rule from its pattern.
    ///
    /// # Errors
    /// Returns an error if the regex pattern is invalid.
    pub fn new(name: &'static str, pattern: &str, outcome: T) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            outcome,
        })
    }

    /// Stable identifier, e.g. `"debt.owe"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// What this rule resolves to when it fires.
    #[must_use]
    pub const fn outcome(&self) -> T {
        self.outcome
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Captures of the leftmost match in `text`, if any.
    #[must_use]
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.pattern.captures(text)
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T: Copy> RuleSet<T> {
    /// Compile a rule table, preserving its order.
    ///
    /// # Errors
    /// Returns an error if any pattern in the table is invalid.
    pub fn compile(defs: &[RuleDef<T>]) -> Result<Self, regex::Error> {
        let rules = defs
            .iter()
            .map(|&(name, pattern, outcome)| Rule::new(name, pattern, outcome))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// First rule (in table order) matching `text`, together with its captures.
    #[must_use]
    pub fn first_match<'s, 't>(&'s self, text: &'t str) -> Option<(&'s Rule<T>, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.captures(text).map(|caps| (rule, caps)))
    }

    /// Outcome of the first matching rule.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|rule| rule.is_match(text))
            .map(Rule::outcome)
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule<T>> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

/// Compile a built-in rule table.
///
/// Built-in tables are string literals covered by the unit tests of every
/// extractor, so a failure here is a programming error.
#[expect(
    clippy::expect_used,
    reason = "Static rule tables are validated by unit tests"
)]
pub(crate) fn compile_builtin<T: Copy>(defs: &[RuleDef<T>]) -> RuleSet<T> {
    RuleSet::compile(defs).expect("built-in rule table must compile")
}
