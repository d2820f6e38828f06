//! Configuration for the `cashflow` binary, stored as JSON under
//! `~/cashflow/config.json`.

mod schema;

pub use schema::{Config, ConfigSource, HarnessConfig, LoggingConfig};
