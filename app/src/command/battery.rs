use cashflow_config::HarnessConfig;
use cashflow_core::{FallbackParser, TranscriptParser};
use cashflow_harness::{
    CaseReport, Fixture, Rating, SuiteReport, default_fixtures, load_fixtures, run_suite,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Input parameters for the Test command strategy.
#[derive(Debug, Clone, Default)]
pub struct TestInput {
    /// Summary only.
    pub quiet: bool,
    /// Write the JSON report.
    pub save: bool,
    /// Report path override.
    pub report: Option<PathBuf>,
    /// Fixture file override.
    pub fixtures: Option<PathBuf>,
    /// Harness settings from the already loaded config.
    pub harness: HarnessConfig,
}

/// Strategy for running the accuracy battery through the fallback parser.
///
/// Fixtures come from `--fixtures`, then `harness.fixtures_path` in the
/// config, then the built-in battery.
#[derive(Debug, Clone, Copy)]
pub struct TestStrategy;

impl super::CommandStrategy for TestStrategy {
    type Input = TestInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<ExitCode> {
        let harness = input.harness;
        let parser = FallbackParser;

        let fixtures = load_battery(input.fixtures, harness.fixtures_path).await?;

        println!("{}", "=".repeat(70));
        println!("🧪 Running Test Suite ({} samples)", fixtures.len());
        println!("Parser: {}", parser.name());
        println!("{}", "=".repeat(70));

        let report = run_suite(&parser, &fixtures);

        if harness.verbose && !input.quiet {
            for (i, case) in report.details.iter().enumerate() {
                print_case(i + 1, report.total, case)?;
            }
        }

        print_summary(&report);

        if input.save {
            let path = input.report.unwrap_or(harness.report_path);
            report.save(&path).await?;
            println!("\n💾 Test report saved to {}", path.display());
        }

        info!("Test run finished");
        Ok(ExitCode::SUCCESS)
    }
}

/// Pick the battery: the CLI file, then the configured file, then the
/// built-in fixtures.
async fn load_battery(
    cli: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> anyhow::Result<Vec<Fixture>> {
    match cli.or(configured) {
        Some(path) => Ok(load_fixtures(&path).await?),
        None => Ok(default_fixtures()),
    }
}

fn print_case(index: usize, total: usize, case: &CaseReport) -> anyhow::Result<()> {
    println!("\n{}", "─".repeat(70));
    println!("Test {index}/{total}");
    println!("Input: '{}'", case.input);
    println!("Status: {} (Parser: {})", case.status.label(), case.parser);
    println!("Parsed: {}", serde_json::to_string_pretty(&case.parsed)?);
    if !case.mismatches.is_empty() {
        let issues: Vec<String> = case.mismatches.iter().map(ToString::to_string).collect();
        println!("Issues: {}", issues.join(", "));
    }
    Ok(())
}

fn print_summary(report: &SuiteReport) {
    println!("\n{}", "=".repeat(70));
    println!("📊 TEST SUMMARY");
    println!("{}", "=".repeat(70));
    println!("Total Tests: {}", report.total);
    println!(
        "✓ Passed: {} ({:.1}%)",
        report.passed,
        report.percent(report.passed)
    );
    println!(
        "⚠ Partial: {} ({:.1}%)",
        report.partial,
        report.percent(report.partial)
    );
    println!(
        "✗ Failed: {} ({:.1}%)",
        report.failed,
        report.percent(report.failed)
    );
    println!("\n🎯 Overall Accuracy: {:.1}%", report.accuracy);

    match report.rating() {
        Rating::NeedsWork => {
            println!("⚠️  Accuracy below 80% - consider improving the extraction rules");
        }
        Rating::Excellent => println!("🎉 Great accuracy! System is working well"),
        Rating::Acceptable => {}
    }
}
