use cashflow_config::Config;
use std::process::ExitCode;

/// Strategy for initializing the configuration.
///
/// This strategy creates the default configuration file at `~/cashflow/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<ExitCode> {
        Config::create_config()?;
        Ok(ExitCode::SUCCESS)
    }
}
