//! Transaction record produced by the parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a bookkeeping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
#[derive(Default)]
pub enum TransactionType {
    /// Money coming in: "sold", "collect", "receive"
    Income = 0,
    /// Money going out. Also the fallback when nothing else matches.
    #[default]
    Expense = 1,
    /// Money owed either way: "owe", "credit", "borrow"
    Debt = 2,
}

impl TransactionType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Debt => "debt",
        }
    }
}

impl FromStr for TransactionType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "debt" => Ok(Self::Debt),
            _ => Err("unknown transaction type"),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the money changed hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PaymentMethod {
    Cash = 0,
    /// Card terminal.
    Pos = 1,
    /// Bank transfer.
    Transfer = 2,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Pos => "pos",
            Self::Transfer => "transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "pos" => Ok(Self::Pos),
            "transfer" => Ok(Self::Transfer),
            _ => Err("unknown payment method"),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency tag. Fixed for the target locale, never read from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Nigerian naira.
    #[default]
    #[serde(rename = "NGN")]
    Ngn,
}

impl Currency {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ngn => "NGN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parsed transaction.
///
/// Fields are read-only once the record is built. Every field except `type`,
/// `currency` and `raw` may be absent, and absent fields serialize as `null`
/// so every parser emits the same JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    kind: TransactionType,
    item: Option<String>,
    quantity: Option<u32>,
    amount: Option<u64>,
    #[serde(default)]
    currency: Currency,
    method: Option<PaymentMethod>,
    person: Option<String>,
    /// Left for manual entry.
    #[serde(default)]
    date: Option<NaiveDate>,
    raw: String,
}

impl TransactionRecord {
    /// Start a record for `raw`; only the type is required.
    #[must_use]
    pub fn builder(kind: TransactionType, raw: impl Into<String>) -> TransactionRecordBuilder {
        TransactionRecordBuilder {
            record: Self {
                kind,
                item: None,
                quantity: None,
                amount: None,
                currency: Currency::default(),
                method: None,
                person: None,
                date: None,
                raw: raw.into(),
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TransactionType {
        self.kind
    }

    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    #[must_use]
    pub const fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    #[must_use]
    pub const fn amount(&self) -> Option<u64> {
        self.amount
    }

    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub const fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    #[must_use]
    pub fn person(&self) -> Option<&str> {
        self.person.as_deref()
    }

    /// Always `None`: dates are entered by hand.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Builder for [`TransactionRecord`].
#[derive(Debug, Clone)]
pub struct TransactionRecordBuilder {
    record: TransactionRecord,
}

impl TransactionRecordBuilder {
    #[must_use]
    pub fn item(mut self, item: Option<String>) -> Self {
        self.record.item = item;
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Option<u32>) -> Self {
        self.record.quantity = quantity;
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Option<u64>) -> Self {
        self.record.amount = amount;
        self
    }

    #[must_use]
    pub fn method(mut self, method: Option<PaymentMethod>) -> Self {
        self.record.method = method;
        self
    }

    #[must_use]
    pub fn person(mut self, person: Option<String>) -> Self {
        self.record.person = person;
        self
    }

    #[must_use]
    pub fn build(self) -> TransactionRecord {
        self.record
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
mod tests {
    use super::*;

    #[test]
    fn test_enum_string_forms() {
        assert_eq!(TransactionType::Debt.as_str(), "debt");
        assert_eq!("INCOME".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert!("refund".parse::<TransactionType>().is_err());
        assert_eq!(PaymentMethod::Pos.to_string(), "pos");
        assert_eq!("Transfer".parse::<PaymentMethod>(), Ok(PaymentMethod::Transfer));
        assert_eq!(Currency::Ngn.code(), "NGN");
        assert_eq!(TransactionType::default(), TransactionType::Expense);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = TransactionRecord::builder(TransactionType::Expense, "Hello there").build();
        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["type"], "expense");
        assert_eq!(json["currency"], "NGN");
        assert_eq!(json["raw"], "Hello there");
        for key in ["item", "quantity", "amount", "method", "person", "date"] {
            assert!(json[key].is_null(), "{key} should be null");
        }
    }

    #[test]
    fn test_json_shape_matches_model_parser_output() {
        let json = r#"{
            "type": "debt",
            "item": null,
            "quantity": null,
            "amount": 12000,
            "currency": "NGN",
            "method": null,
            "person": "Mama Ngozi",
            "date": null,
            "raw": "Mama Ngozi owes me 12k"
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).expect("valid JSON should deserialize");

        assert_eq!(record.kind(), TransactionType::Debt);
        assert_eq!(record.amount(), Some(12000));
        assert_eq!(record.person(), Some("Mama Ngozi"));
        assert_eq!(record.date(), None);
    }
}
