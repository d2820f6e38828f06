//! Fixture battery: transcripts paired with the fields they should produce.

use cashflow_core::{PaymentMethod, TransactionType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// The fields a fixture asserts. Fields left as `None` are not scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedFields {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

impl ExpectedFields {
    /// Expect only a transaction type.
    #[must_use]
    pub fn of(kind: TransactionType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn item(mut self, item: &str) -> Self {
        self.item = Some(item.to_string());
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn person(mut self, person: &str) -> Self {
        self.person = Some(person.to_string());
        self
    }
}

/// One transcript and its expected fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub input: String,
    pub expected: ExpectedFields,
}

impl Fixture {
    #[must_use]
    pub fn new(input: impl Into<String>, expected: ExpectedFields) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}

/// Built-in battery covering income, expense and debt phrasing in Nigerian
/// English and Pidgin.
///
/// The expectations describe what a bookkeeper would record, not what the
/// fallback rules happen to produce, so a keyword-only parser does not score
/// 100% here.
#[must_use]
pub fn default_fixtures() -> Vec<Fixture> {
    use PaymentMethod::{Cash, Pos, Transfer};
    use TransactionType::{Debt, Expense, Income};

    vec![
        // Income
        Fixture::new(
            "Sold 3 bags of rice for 15k cash",
            ExpectedFields::of(Income).amount(15_000).item("rice").quantity(3),
        ),
        Fixture::new(
            "I collect 50,000 naira from customer",
            ExpectedFields::of(Income).amount(50_000),
        ),
        Fixture::new(
            "Receive payment 100k via POS",
            ExpectedFields::of(Income).amount(100_000).method(Pos),
        ),
        // Expense
        Fixture::new(
            "I buy stock for 10,000 from Iya Biliki",
            ExpectedFields::of(Expense).amount(10_000).person("Iya Biliki"),
        ),
        Fixture::new(
            "Bought 5 cartons of tomatoes 25k",
            ExpectedFields::of(Expense).amount(25_000).item("tomatoes").quantity(5),
        ),
        Fixture::new(
            "Pay transport 2k cash",
            ExpectedFields::of(Expense).amount(2_000).method(Cash),
        ),
        Fixture::new("I chop 5k for lunch", ExpectedFields::of(Expense).amount(5_000)),
        // Debt
        Fixture::new(
            "Mama Ngozi owes me 12k",
            ExpectedFields::of(Debt).amount(12_000).person("Mama Ngozi"),
        ),
        Fixture::new(
            "Chief Ade owe me 50,000 naira",
            ExpectedFields::of(Debt).amount(50_000).person("Chief Ade"),
        ),
        Fixture::new(
            "Baba Tunde borrow 20k from me",
            ExpectedFields::of(Debt).amount(20_000).person("Baba Tunde"),
        ),
        Fixture::new("Credit customer 15k", ExpectedFields::of(Debt).amount(15_000)),
        // Named customers paying in
        Fixture::new(
            "Oga Chidi paid 30k via transfer",
            ExpectedFields::of(Income)
                .amount(30_000)
                .person("Oga Chidi")
                .method(Transfer),
        ),
        Fixture::new(
            "Mrs Adeyemi buy 2 bags of beans 18k",
            ExpectedFields::of(Income)
                .amount(18_000)
                .person("Mrs Adeyemi")
                .item("beans")
                .quantity(2),
        ),
        // Edge cases
        Fixture::new("Took 2k as change", ExpectedFields::of(Expense).amount(2_000)),
        Fixture::new(
            "Sold garri 7,500",
            ExpectedFields::of(Income).amount(7_500).item("garri"),
        ),
        Fixture::new(
            "Buy fuel for generator 3k",
            ExpectedFields::of(Expense).amount(3_000),
        ),
        Fixture::new(
            "Receive payment 500k from supplier",
            ExpectedFields::of(Income).amount(500_000),
        ),
        Fixture::new(
            "Give boy 200 naira for errand",
            ExpectedFields::of(Expense).amount(200),
        ),
        Fixture::new("Customer collect goods on credit", ExpectedFields::of(Debt)),
        Fixture::new(
            "Sell rice and beans 45k total",
            ExpectedFields::of(Income).amount(45_000),
        ),
    ]
}

/// Load a fixture battery from a JSON array file.
///
/// The file uses the same shape as [`Fixture`]:
/// `[{"input": "...", "expected": {"type": "income", "amount": 15000}}]`.
pub async fn load_fixtures(path: impl AsRef<Path>) -> Result<Vec<Fixture>> {
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let fixtures: Vec<Fixture> =
        serde_json::from_str(&content).map_err(|source| Error::Fixtures {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} fixtures from {}", fixtures.len(), path.display());
    Ok(fixtures)
}
