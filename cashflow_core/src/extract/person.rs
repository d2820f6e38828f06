//! Counterparty names: "Mama Ngozi", "from Iya Biliki", "to Tunde".

use std::sync::OnceLock;
use tracing::debug;

use crate::rules::{RuleDef, RuleSet, compile_builtin};

/// Which part of a match is the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSpan {
    /// The whole match, honorific included.
    Whole,
    /// Only the capitalized words after the preposition.
    AfterPreposition,
}

/// Matched case-sensitively: names must be capitalized, which keeps
/// "from customer" or "to market" out.
const PERSON_RULES: &[RuleDef<NameSpan>] = &[
    (
        "person.honorific",
        r"\b(Mama|Iya|Baba|Chief|Oga|Mr|Mrs|Miss)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        NameSpan::Whole,
    ),
    (
        "person.from",
        r"\bfrom\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        NameSpan::AfterPreposition,
    ),
    (
        "person.to",
        r"\bto\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        NameSpan::AfterPreposition,
    ),
];

static RULES: OnceLock<RuleSet<NameSpan>> = OnceLock::new();

#[must_use]
pub fn person_rules() -> &'static RuleSet<NameSpan> {
    RULES.get_or_init(|| compile_builtin(PERSON_RULES))
}

#[must_use]
pub fn extract_person(text: &str) -> Option<String> {
    let (rule, caps) = person_rules().first_match(text)?;

    let name = match rule.outcome() {
        NameSpan::Whole => caps.get(0)?,
        NameSpan::AfterPreposition => caps.get(1)?,
    };

    debug!("person {:?} via {}", name.as_str(), rule.name());
    Some(name.as_str().to_string())
}
