use anyhow::Context;
use cashflow_core::{FallbackParser, TranscriptParser};
use serde::Deserialize;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::output::{Envelope, Mode};

/// Exit code for a missing transcript (usage error).
const EXIT_USAGE: u8 = 2;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone, Default)]
pub struct ParseInput {
    /// Positional transcript (simple mode).
    pub transcript: Option<String>,
    pub mode: Mode,
    /// JSON payload (advanced mode).
    pub input: Option<String>,
}

/// Payload accepted by `--mode advanced --input`.
#[derive(Debug, Deserialize)]
struct AdvancedPayload {
    #[serde(default)]
    transcript: String,
    #[serde(rename = "userId", default)]
    user_id: Option<Value>,
}

/// A transcript ready to parse, with where it came from.
#[derive(Debug, PartialEq)]
struct Request {
    mode: Mode,
    transcript: String,
    user_id: Option<Value>,
}

/// Strategy for parsing one transcript and printing the JSON envelope.
///
/// Failures are printed as JSON too; only the exit code tells them apart:
/// 0 parsed, 1 unexpected failure, 2 missing transcript.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<ExitCode> {
        let parser = FallbackParser;

        let (envelope, code) = match resolve(input) {
            Ok(Some(request)) => {
                info!("Parsing transcript in {:?} mode", request.mode);
                let record = parser.parse(&request.transcript);
                (
                    Envelope::parsed(request.mode, parser.name(), record, request.user_id),
                    ExitCode::SUCCESS,
                )
            }
            Ok(None) => {
                warn!("No transcript provided");
                (Envelope::missing_transcript(), ExitCode::from(EXIT_USAGE))
            }
            Err(e) => {
                warn!("Parse failed: {e:#}");
                (Envelope::failure(&e), ExitCode::FAILURE)
            }
        };

        println!("{}", envelope.to_json()?);
        Ok(code)
    }
}

/// Pick the transcript out of the CLI input.
///
/// Advanced mode only applies when a payload was given; otherwise the
/// positional transcript is used whatever the mode. An empty positional
/// transcript counts as missing, while an empty payload transcript is parsed.
fn resolve(input: ParseInput) -> anyhow::Result<Option<Request>> {
    match (input.mode, input.input, input.transcript) {
        (Mode::Advanced, Some(payload), _) => {
            let payload: AdvancedPayload =
                serde_json::from_str(&payload).context("Invalid JSON input")?;
            Ok(Some(Request {
                mode: Mode::Advanced,
                transcript: payload.transcript,
                user_id: payload.user_id,
            }))
        }
        (_, _, Some(transcript)) if !transcript.is_empty() => Ok(Some(Request {
            mode: Mode::Simple,
            transcript,
            user_id: None,
        })),
        _ => Ok(None),
    }
}
