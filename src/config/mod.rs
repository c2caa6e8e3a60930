use std::env;
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

/// Distinguishes runtime behavior for different stages of the batch tool.
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
    pub data: DataConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let reference_date = match env::var("MORTGAGE_REFERENCE_DATE") {
            Ok(raw) => Some(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(
                |source| ConfigError::InvalidReferenceDate {
                    value: raw.clone(),
                    source,
                },
            )?),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data: DataConfig {
                clients_file: path_var("MORTGAGE_CLIENTS_FILE", "data/clients.csv"),
                debtors_file: path_var("MORTGAGE_DEBTORS_FILE", "data/debtors.csv"),
                rates_file: path_var("MORTGAGE_RATES_FILE", "data/interest_rates.csv"),
                offers_file: path_var("MORTGAGE_OFFERS_FILE", "data/mortgage_offers.csv"),
                reference_date,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}

/// Locations of the three input tables and the offer sink, plus an optional
/// fixed reference date for deterministic age computation.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub clients_file: PathBuf,
    pub debtors_file: PathBuf,
    pub rates_file: PathBuf,
    pub offers_file: PathBuf,
    pub reference_date: Option<NaiveDate>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidReferenceDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidReferenceDate { value, .. } => {
                write!(
                    f,
                    "MORTGAGE_REFERENCE_DATE '{}' must be a YYYY-MM-DD date",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidReferenceDate { source, .. } => Some(source),
        }
    }
}
