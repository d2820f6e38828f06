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

use cashflow_config::{Config, ConfigSource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod output;

use command::{
    CommandStrategy, InitStrategy, ParseInput, ParseStrategy, TestInput, TestStrategy,
    VersionStrategy,
};
use output::Mode;

#[derive(Parser)]
#[command(name = "cashflow")]
#[command(about = "Turn spoken bookkeeping transcripts into transaction records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one transcript and print the record as JSON
    Parse {
        /// Transcript to parse
        transcript: Option<String>,

        /// Parsing mode
        #[arg(long, value_enum, default_value_t = Mode::Simple)]
        mode: Mode,

        /// JSON payload for advanced mode: {"transcript": "...", "userId": ...}
        #[arg(long)]
        input: Option<String>,
    },
    /// Run the accuracy battery
    Test {
        /// Print the summary only
        #[arg(short, long)]
        quiet: bool,

        /// Save the JSON report
        #[arg(short, long)]
        save: bool,

        /// Report path (defaults to harness.report_path)
        #[arg(long)]
        report: Option<PathBuf>,

        /// JSON fixture file replacing the built-in battery
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logging needs the configured level, so the load result is reported
    // once the subscriber is installed.
    let (config, source) = Config::load_or_default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match source {
        ConfigSource::File(path) => info!("Using config at {}", path.display()),
        ConfigSource::Defaults(reason) => warn!("{reason:#}, using defaults"),
    }

    match cli.command {
        Commands::Parse {
            transcript,
            mode,
            input,
        } => {
            ParseStrategy
                .execute(ParseInput {
                    transcript,
                    mode,
                    input,
                })
                .await
        }
        Commands::Test {
            quiet,
            save,
            report,
            fixtures,
        } => {
            TestStrategy
                .execute(TestInput {
                    quiet,
                    save,
                    report,
                    fixtures,
                    harness: config.harness,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
