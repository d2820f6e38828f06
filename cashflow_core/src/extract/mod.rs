//! The six field extractors.
//!
//! Each extractor reads the raw transcript on its own and is total: it returns
//! a value or `None`, never an error. None of them looks at another's output.

mod amount;
mod item;
mod kind;
mod method;
mod person;

pub use amount::{AmountNotation, amount_rules, extract_amount};
pub use item::{ItemSource, extract_item, extract_quantity, item_rules};
pub use kind::{detect_transaction_type, type_rules};
pub use method::{extract_payment_method, method_rules};
pub use person::{NameSpan, extract_person, person_rules};
