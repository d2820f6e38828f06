//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use std::process::ExitCode;

mod battery;
mod init;
mod parse;
mod version;

pub use battery::{TestInput, TestStrategy};
pub use init::InitStrategy;
pub use parse::{ParseInput, ParseStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<ExitCode> {
///         // Command logic here
///         Ok(ExitCode::SUCCESS)
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// Commands that report failures in-band (as JSON) still return `Ok`
    /// and signal the failure through the exit code.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<ExitCode>;
}
