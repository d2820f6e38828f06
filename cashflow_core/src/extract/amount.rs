//! Amount normalization: "15k", "15,000", "15000".

use std::sync::OnceLock;
use tracing::debug;

use crate::rules::{RuleDef, RuleSet, compile_builtin};

/// Notation an amount was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountNotation {
    /// "15k", "2.5K", "100 k"
    Thousands,
    /// "15,000", "1,234,567"
    Grouped,
    /// "15000": bare run of three or more digits
    Bare,
}

/// Checked in this order; the first notation found anywhere wins, even if a
/// later notation appears earlier in the text or would give a larger value.
const AMOUNT_RULES: &[RuleDef<AmountNotation>] = &[
    (
        "amount.thousands",
        r"([0-9]+(?:\.[0-9]+)?)\s*[kK]",
        AmountNotation::Thousands,
    ),
    (
        "amount.grouped",
        r"([0-9]{1,3}(?:,[0-9]{3})+)",
        AmountNotation::Grouped,
    ),
    // Shorter runs are too often counts ("3 bags") to trust as money.
    ("amount.bare", r"\b([0-9]{3,})\b", AmountNotation::Bare),
];

static RULES: OnceLock<RuleSet<AmountNotation>> = OnceLock::new();

/// Compiled amount rules, in priority order.
#[must_use]
pub fn amount_rules() -> &'static RuleSet<AmountNotation> {
    RULES.get_or_init(|| compile_builtin(AMOUNT_RULES))
}

/// Extract an amount in whole currency units.
#[must_use]
pub fn extract_amount(text: &str) -> Option<u64> {
    let (rule, caps) = amount_rules().first_match(text)?;
    let digits = caps.get(1)?.as_str();

    let amount = match rule.outcome() {
        AmountNotation::Thousands => thousands(digits),
        AmountNotation::Grouped => saturating_parse(&digits.replace(',', "")),
        AmountNotation::Bare => saturating_parse(digits),
    };

    debug!("amount {amount} from {:?} via {}", digits, rule.name());
    Some(amount)
}

/// Scale a "k" value, truncating the float product toward zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Truncation of the scaled value is the intended rounding; the cast saturates"
)]
fn thousands(digits: &str) -> u64 {
    let value: f64 = digits.parse().unwrap_or(f64::MAX);
    (value * 1000.0) as u64
}

/// `digits` holds only ASCII digits, so parsing can only fail on overflow.
fn saturating_parse(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
