//! Running a battery and summarising the results.

use cashflow_core::TranscriptParser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fixture::Fixture;
use crate::score::{CaseReport, CaseStatus, score};

/// Coarse verdict on a suite's accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 90% and above.
    Excellent,
    Acceptable,
    /// Below 80%: the rules or prompts need work.
    NeedsWork,
}

impl Rating {
    #[must_use]
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 90.0 {
            Self::Excellent
        } else if accuracy < 80.0 {
            Self::NeedsWork
        } else {
            Self::Acceptable
        }
    }
}

/// Aggregate result of running a battery through one parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub parser: String,
    pub total: usize,
    pub passed: usize,
    pub partial: usize,
    pub failed: usize,
    /// Percentage; a partial case counts as half a pass.
    pub accuracy: f64,
    pub details: Vec<CaseReport>,
}

impl SuiteReport {
    /// Summarise scored cases.
    #[must_use]
    pub fn from_cases(parser: &str, details: Vec<CaseReport>) -> Self {
        let count = |status: CaseStatus| details.iter().filter(|c| c.status == status).count();
        let passed = count(CaseStatus::Passed);
        let partial = count(CaseStatus::Partial);
        let failed = count(CaseStatus::Failed);
        let total = details.len();

        Self {
            parser: parser.to_string(),
            total,
            passed,
            partial,
            failed,
            accuracy: accuracy(passed, partial, total),
            details,
        }
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_accuracy(self.accuracy)
    }

    /// Share of `count` in the total, as a percentage.
    #[must_use]
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Write the report as pretty-printed JSON.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        tokio::fs::write(path, json)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Test report saved to {}", path.display());
        Ok(())
    }
}

fn accuracy(passed: usize, partial: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 + partial as f64 * 0.5) / total as f64 * 100.0
}

/// Parse every fixture with `parser` and score the results.
pub fn run_suite<P>(parser: &P, fixtures: &[Fixture]) -> SuiteReport
where
    P: TranscriptParser + ?Sized,
{
    info!(
        "Running {} fixtures through the {} parser",
        fixtures.len(),
        parser.name()
    );

    let details: Vec<CaseReport> = fixtures
        .iter()
        .map(|fixture| {
            let case = score(fixture, parser.parse(&fixture.input), parser.name());
            debug!("{:?} -> {:?}", fixture.input, case.status);
            case
        })
        .collect();

    let report = SuiteReport::from_cases(parser.name(), details);
    info!(
        "passed={} partial={} failed={} accuracy={:.1}%",
        report.passed, report.partial, report.failed, report.accuracy
    );
    report
}
