//! JSON envelopes printed by `cashflow parse`.
//!
//! Every outcome, including bad input, is a JSON object on stdout with a
//! `success` flag, so a calling process only ever has to parse one shape.

use cashflow_core::TransactionRecord;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

pub const USAGE_HINT: &str = "cashflow parse 'Sold 3 bags of rice for 15k cash'";

/// How the transcript reached the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Transcript as a positional argument.
    #[default]
    Simple,
    /// JSON payload via `--input`: `{"transcript": "...", "userId": ...}`.
    Advanced,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Parsed(Parsed),
    Usage(Usage),
    Failure(Failure),
}

#[derive(Debug, Serialize)]
pub struct Parsed {
    pub success: bool,
    pub mode: Mode,
    pub parser: String,
    pub transcript: String,
    pub parsed: TransactionRecord,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub success: bool,
    pub error: String,
    pub usage: String,
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl Envelope {
    pub fn parsed(
        mode: Mode,
        parser: &str,
        record: TransactionRecord,
        user_id: Option<Value>,
    ) -> Self {
        Self::Parsed(Parsed {
            success: true,
            mode,
            parser: parser.to_string(),
            transcript: record.raw().to_string(),
            parsed: record,
            timestamp: Utc::now(),
            user_id,
        })
    }

    pub fn missing_transcript() -> Self {
        Self::Usage(Usage {
            success: false,
            error: "No transcript provided".to_string(),
            usage: USAGE_HINT.to_string(),
        })
    }

    pub fn failure(error: &anyhow::Error) -> Self {
        Self::Failure(Failure {
            success: false,
            error: format!("{error:#}"),
            timestamp: Utc::now(),
        })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
