//! What was traded and how many.

use std::sync::OnceLock;
use tracing::debug;

use crate::rules::{RuleDef, RuleSet, compile_builtin};

/// Where an item rule found its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSource {
    /// "3 bags of rice"
    Container,
    /// "bought garri", "sell rice and beans"
    TradeVerb,
    /// A known stock word anywhere in the text.
    Vocabulary,
}

/// Matched against lower-cased text. Capture group 1 is the item.
const ITEM_RULES: &[RuleDef<ItemSource>] = &[
    (
        "item.container",
        r"(?:bags? of|sacks? of|cartons? of|pieces? of)\s+([a-z]+)",
        ItemSource::Container,
    ),
    (
        "item.trade_verb",
        r"(?:buy|bought|sold|sell)\s+([a-z]+(?:\s+[a-z]+)?)",
        ItemSource::TradeVerb,
    ),
    (
        "item.vocabulary",
        r"\b(rice|beans|garri|yam|fish|meat|stock|goods)\b",
        ItemSource::Vocabulary,
    ),
];

const QUANTITY_PATTERN: &str = r"\b([0-9]+)\s+(?:bags?|sacks?|cartons?|pieces?|items?)\b";

static ITEMS: OnceLock<RuleSet<ItemSource>> = OnceLock::new();
static QUANTITY: OnceLock<RuleSet<()>> = OnceLock::new();

#[must_use]
pub fn item_rules() -> &'static RuleSet<ItemSource> {
    ITEMS.get_or_init(|| compile_builtin(ITEM_RULES))
}

fn quantity_rules() -> &'static RuleSet<()> {
    QUANTITY.get_or_init(|| compile_builtin(&[("quantity.unit", QUANTITY_PATTERN, ())]))
}

#[must_use]
pub fn extract_item(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let (rule, caps) = item_rules().first_match(&lower)?;
    let item = caps.get(1)?.as_str();

    debug!("item {item:?} via {}", rule.name());
    Some(item.to_string())
}

/// Count attached to a unit word. Only positive counts are reported.
#[must_use]
pub fn extract_quantity(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let (_, caps) = quantity_rules().first_match(&lower)?;

    caps.get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|&count| count > 0)
}
