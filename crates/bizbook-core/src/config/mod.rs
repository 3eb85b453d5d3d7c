use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_LOG_LEVEL, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub output: OutputFormat,
    /// When false, uploads are not rejected on their file name.
    pub require_vcf_extension: bool,
}

/// How import results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, `BIZBOOK_*` environment variables and an
    /// optional TOML file. Environment variables take precedence over the file.
    ///
    /// `file` overrides the default `config.toml` lookup; an explicit file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("import.output", OutputFormat::Pretty.as_str())?
            .set_default("import.require_vcf_extension", true)?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the log level is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and an
/// optional settings file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    tracing::debug!(file = ?file, "Loading settings");

    Settings::load(file)
}
