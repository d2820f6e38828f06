//! Payment method: POS, transfer or cash.

use std::sync::OnceLock;

use crate::record::PaymentMethod;
use crate::rules::{RuleDef, RuleSet, compile_builtin};

/// When several appear ("paid cash via POS") the earlier rule wins.
const METHOD_RULES: &[RuleDef<PaymentMethod>] = &[
    ("method.pos", r"\bpos\b", PaymentMethod::Pos),
    ("method.transfer", r"\btransfer\b", PaymentMethod::Transfer),
    ("method.cash", r"\bcash\b", PaymentMethod::Cash),
];

static RULES: OnceLock<RuleSet<PaymentMethod>> = OnceLock::new();

#[must_use]
pub fn method_rules() -> &'static RuleSet<PaymentMethod> {
    RULES.get_or_init(|| compile_builtin(METHOD_RULES))
}

#[must_use]
pub fn extract_payment_method(text: &str) -> Option<PaymentMethod> {
    method_rules().resolve(&text.to_lowercase())
}
