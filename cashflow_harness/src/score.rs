//! Per-field scoring of a parsed record against a fixture.

use cashflow_core::TransactionRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

use crate::fixture::{ExpectedFields, Fixture};

/// A scorable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[serde(rename = "type")]
    Kind,
    Amount,
    Item,
    Quantity,
    Method,
    Person,
}

impl Field {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kind => "type",
            Self::Amount => "amount",
            Self::Item => "item",
            Self::Quantity => "quantity",
            Self::Method => "method",
            Self::Person => "person",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Every expected field matched.
    Passed,
    /// Some mismatches, but at least as many matches.
    Partial,
    Failed,
}

impl CaseStatus {
    /// Classify from match/mismatch counts.
    #[must_use]
    pub const fn classify(matches: usize, mismatches: usize) -> Self {
        if mismatches == 0 {
            Self::Passed
        } else if matches >= mismatches {
            Self::Partial
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed => "✓ PASSED",
            Self::Partial => "⚠ PARTIAL",
            Self::Failed => "✗ FAILED",
        }
    }
}

/// A field whose parsed value differs from the expected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    pub field: Field,
    pub expected: Value,
    pub actual: Value,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Scored result of a single fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub input: String,
    pub status: CaseStatus,
    pub parsed: TransactionRecord,
    pub matches: Vec<Field>,
    pub mismatches: Vec<Mismatch>,
    /// Name of the parser that produced `parsed`.
    pub parser: String,
}

/// Expected values as JSON, in a fixed field order. Unset fields are skipped.
fn expected_values(expected: &ExpectedFields) -> Vec<(Field, Value)> {
    [
        (Field::Kind, expected.kind.map(|k| json!(k))),
        (Field::Amount, expected.amount.map(|a| json!(a))),
        (Field::Item, expected.item.as_ref().map(|i| json!(i))),
        (Field::Quantity, expected.quantity.map(|q| json!(q))),
        (Field::Method, expected.method.map(|m| json!(m))),
        (Field::Person, expected.person.as_ref().map(|p| json!(p))),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

/// Value of `field` in `record` as JSON; absent fields are `null`.
#[must_use]
pub fn actual_value(record: &TransactionRecord, field: Field) -> Value {
    match field {
        Field::Kind => json!(record.kind()),
        Field::Amount => json!(record.amount()),
        Field::Item => json!(record.item()),
        Field::Quantity => json!(record.quantity()),
        Field::Method => json!(record.method()),
        Field::Person => json!(record.person()),
    }
}

/// Compare `record` with the fields `fixture` expects.
#[must_use]
pub fn score(fixture: &Fixture, record: TransactionRecord, parser: &str) -> CaseReport {
    let mut matches = Vec::new();
    let mut mismatches = Vec::new();

    for (field, expected) in expected_values(&fixture.expected) {
        let actual = actual_value(&record, field);
        if actual == expected {
            matches.push(field);
        } else {
            mismatches.push(Mismatch {
                field,
                expected,
                actual,
            });
        }
    }

    CaseReport {
        input: fixture.input.clone(),
        status: CaseStatus::classify(matches.len(), mismatches.len()),
        parsed: record,
        matches,
        mismatches,
        parser: parser.to_string(),
    }
}
