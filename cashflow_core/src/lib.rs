#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Rule-based extraction of bookkeeping records from short spoken-style
//! transcripts ("Sold 3 bags of rice for 15k cash", "Mama Ngozi owes me 12k").
//!
//! The engine is a pure function: [`parse`] takes a transcript and returns a
//! [`TransactionRecord`]. It does no I/O, keeps no state between calls and
//! never fails.

pub mod extract;
mod parser;
mod record;
pub mod rules;

pub use parser::{FallbackParser, TranscriptParser, parse};
pub use record::{
    Currency, PaymentMethod, TransactionRecord, TransactionRecordBuilder, TransactionType,
};
