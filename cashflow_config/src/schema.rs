use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a loaded [`Config`] came from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// Built-in defaults, with the reason the file was not used.
    Defaults(anyhow::Error),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub harness: HarnessConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset, e.g. `"warn"` or `"cashflow_core=debug"`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    #[serde(default = "HarnessConfig::default_report_path")]
    pub report_path: PathBuf,
    /// Fixture file replacing the built-in battery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_path: Option<PathBuf>,
    #[serde(default = "HarnessConfig::default_verbose")]
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            report_path: Self::default_report_path(),
            fixtures_path: None,
            verbose: Self::default_verbose(),
        }
    }
}

impl HarnessConfig {
    fn default_report_path() -> PathBuf {
        PathBuf::from("test_report.json")
    }

    const fn default_verbose() -> bool {
        true
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "logging": {
    "level": "warn"
  },
  "harness": {
    "report_path": "test_report.json",
    "verbose": true
  }
}
"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("cashflow"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;

        Ok(config)
    }

    /// Load `~/cashflow/config.json`, falling back to defaults.
    ///
    /// Never fails: a missing or broken file yields the defaults and a
    /// [`ConfigSource::Defaults`] carrying the reason, so the caller can log it
    /// once logging is up.
    #[must_use]
    pub fn load_or_default() -> (Self, ConfigSource) {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_at(&path),
            Err(e) => (Self::default(), ConfigSource::Defaults(e)),
        }
    }

    #[must_use]
    pub fn load_or_default_at(path: &Path) -> (Self, ConfigSource) {
        if !path.exists() {
            return (
                Self::default(),
                ConfigSource::Defaults(anyhow::anyhow!("No config at {}", path.display())),
            );
        }

        match Self::load_from(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                (config, ConfigSource::File(path.to_path_buf()))
            }
            Err(e) => (Self::default(), ConfigSource::Defaults(e)),
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        Self::create_config_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - logging.level: default log filter when RUST_LOG is unset");
        println!("   - harness.report_path: where 'cashflow test --save' writes its report");
        println!("   - harness.fixtures_path: JSON fixture file replacing the built-in battery");
        println!("   - harness.verbose: print every case during 'cashflow test'");
        println!();
        Ok(())
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}
