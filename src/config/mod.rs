use crate::applications::{DEFAULT_OUTPUT_PATH, DEFAULT_RECORD_COUNT};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub generation: GenerationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let count = match env::var("FAKE_DATA_COUNT") {
            Ok(raw) => parse_count(&raw)?,
            Err(_) => DEFAULT_RECORD_COUNT,
        };

        let output = env::var("FAKE_DATA_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let seed = env::var("FAKE_DATA_SEED")
            .ok()
            .map(|raw| parse_seed(&raw))
            .transpose()?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            generation: GenerationConfig {
                count,
                output,
                seed,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// What to generate and where to put it.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub count: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidCount {
            value: raw.to_string(),
        })
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidSeed {
            value: raw.to_string(),
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCount { value: String },
    InvalidSeed { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCount { value } => write!(
                f,
                "FAKE_DATA_COUNT must be a non-negative integer, got '{}'",
                value
            ),
            ConfigError::InvalidSeed { value } => {
                write!(f, "FAKE_DATA_SEED must be a valid u64, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
