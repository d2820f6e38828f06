//! Income / expense / debt classification.

use std::sync::OnceLock;
use tracing::debug;

use crate::record::TransactionType;
use crate::rules::{RuleDef, RuleSet, compile_builtin};

/// Keyword rules, matched against lower-cased text.
///
/// Debt words are rare but specific, so they go first and cannot be shadowed
/// by the generic money verbs below them ("Customer collect goods on credit"
/// is a debt, not income).
const TYPE_RULES: &[RuleDef<TransactionType>] = &[
    ("debt.owe", r"\bowes?\b", TransactionType::Debt),
    ("debt.debt", r"\bdebt\b", TransactionType::Debt),
    ("debt.credit", r"\bcredit\b", TransactionType::Debt),
    ("debt.lend", r"\blend\b", TransactionType::Debt),
    ("debt.borrow", r"\bborrow\b", TransactionType::Debt),
    ("income.sold", r"\bsold\b", TransactionType::Income),
    ("income.sell", r"\bsell\b", TransactionType::Income),
    ("income.collect", r"\bcollect\b", TransactionType::Income),
    ("income.receive", r"\breceived?\b", TransactionType::Income),
    ("income.make_money", r"\bmake\b.*\bmoney\b", TransactionType::Income),
    ("income.got_paid", r"\bgot\b.*\bpaid\b", TransactionType::Income),
    ("income.income", r"\bincome\b", TransactionType::Income),
    ("expense.buy", r"\bbuy\b", TransactionType::Expense),
    ("expense.bought", r"\bbought\b", TransactionType::Expense),
    ("expense.pay", r"\bpay\b", TransactionType::Expense),
    ("expense.paid", r"\bpaid\b", TransactionType::Expense),
    // Pidgin: "I chop 5k" = "I spent 5k"
    ("expense.chop", r"\bchop\b", TransactionType::Expense),
    ("expense.spend", r"\bspend\b", TransactionType::Expense),
    ("expense.spent", r"\bspent\b", TransactionType::Expense),
    ("expense.expense", r"\bexpense\b", TransactionType::Expense),
    ("expense.take_change", r"\btake\b.*\bchange\b", TransactionType::Expense),
];

static RULES: OnceLock<RuleSet<TransactionType>> = OnceLock::new();

#[must_use]
pub fn type_rules() -> &'static RuleSet<TransactionType> {
    RULES.get_or_init(|| compile_builtin(TYPE_RULES))
}

/// Classify a transcript. Never fails: unmatched text is an expense.
#[must_use]
pub fn detect_transaction_type(text: &str) -> TransactionType {
    let lower = text.to_lowercase();

    match type_rules().first_match(&lower) {
        Some((rule, _)) => {
            debug!("type {} via {}", rule.outcome(), rule.name());
            rule.outcome()
        }
        None => TransactionType::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_keywords() {
        assert_eq!(detect_transaction_type("Mama Ngozi owes me 12k"), TransactionType::Debt);
        assert_eq!(detect_transaction_type("Chief Ade owe me 50,000 naira"), TransactionType::Debt);
        assert_eq!(detect_transaction_type("Baba Tunde borrow 20k from me"), TransactionType::Debt);
        assert_eq!(detect_transaction_type("Credit customer 15k"), TransactionType::Debt);
        assert_eq!(detect_transaction_type("I lend him 5k"), TransactionType::Debt);
        assert_eq!(detect_transaction_type("clear the debt"), TransactionType::Debt);
    }

    #[test]
    fn test_debt_shadows_income() {
        assert_eq!(
            detect_transaction_type("Customer collect goods on credit"),
            TransactionType::Debt
        );
    }

    #[test]
    fn test_income_keywords() {
        assert_eq!(detect_transaction_type("Sold 3 bags of rice"), TransactionType::Income);
        assert_eq!(detect_transaction_type("Sell rice and beans 45k total"), TransactionType::Income);
        assert_eq!(detect_transaction_type("I collect 50,000 naira"), TransactionType::Income);
        assert_eq!(detect_transaction_type("Received 3k"), TransactionType::Income);
        assert_eq!(detect_transaction_type("I make small money today"), TransactionType::Income);
        assert_eq!(detect_transaction_type("I got my paid"), TransactionType::Income);
        assert_eq!(detect_transaction_type("extra income"), TransactionType::Income);
    }

    #[test]
    fn test_income_shadows_expense() {
        // "got ... paid" fires before the bare "paid" expense rule.
        assert_eq!(detect_transaction_type("I got paid 20k"), TransactionType::Income);
    }

    #[test]
    fn test_expense_keywords() {
        assert_eq!(detect_transaction_type("I buy stock"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("Oga Chidi paid 30k"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("I chop 5k for lunch"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("take your change"), TransactionType::Expense);
    }

    #[test]
    fn test_default_is_expense() {
        assert_eq!(detect_transaction_type("Hello there"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("Took 2k as change"), TransactionType::Expense);
        assert_eq!(detect_transaction_type(""), TransactionType::Expense);
    }

    #[test]
    fn test_whole_words_only() {
        // Keywords inside longer words do not count.
        assert_eq!(detect_transaction_type("he owed nothing"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("resellers"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("payment"), TransactionType::Expense);
        assert_eq!(detect_transaction_type("Receive payment 100k"), TransactionType::Income);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_transaction_type("SOLD GARRI"), TransactionType::Income);
        assert_eq!(detect_transaction_type("He OWES me"), TransactionType::Debt);
    }

    #[test]
    fn test_each_rule_fires_on_its_own() {
        let samples = [
            ("debt.owe", "he owes me"),
            ("debt.debt", "old debt"),
            ("debt.credit", "on credit"),
            ("debt.lend", "lend him"),
            ("debt.borrow", "borrow small"),
            ("income.sold", "sold garri"),
            ("income.sell", "sell rice"),
            ("income.collect", "collect 5k"),
            ("income.receive", "received 3k"),
            ("income.make_money", "make some money"),
            ("income.got_paid", "got it paid"),
            ("income.income", "extra income"),
            ("expense.buy", "buy fuel"),
            ("expense.bought", "bought tomatoes"),
            ("expense.pay", "pay transport"),
            ("expense.paid", "paid rent"),
            ("expense.chop", "chop 5k"),
            ("expense.spend", "spend 2k"),
            ("expense.spent", "spent 2k"),
            ("expense.expense", "shop expense"),
            ("expense.take_change", "take the change"),
        ];
        assert_eq!(samples.len(), type_rules().rules().len());

        for (name, text) in samples {
            let (rule, _) = type_rules()
                .first_match(text)
                .unwrap_or_else(|| panic!("{text:?} should match a rule"));
            assert_eq!(rule.name(), name, "{text:?} should be decided by {name}");
        }
    }
}
