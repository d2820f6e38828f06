#![warn(
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
    clippy::missing_errors_doc,
    clippy::cast_precision_loss
)]

//! Accuracy harness for transcript parsers.
//!
//! Drives any [`cashflow_core::TranscriptParser`] over a battery of
//! transcripts with expected fields, scores each record field by field, and
//! summarises the run as pass / partial / fail counts plus an accuracy
//! percentage.

mod error;
pub mod fixture;
pub mod report;
pub mod score;

pub use error::{Error, Result};
pub use fixture::{ExpectedFields, Fixture, default_fixtures, load_fixtures};
pub use report::{Rating, SuiteReport, run_suite};
pub use score::{CaseReport, CaseStatus, Field, Mismatch, score};
