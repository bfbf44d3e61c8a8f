use crate::core::money::parse_decimal;
use crate::core::{AppError, Result};
use crate::modules::totals::models::{DocumentDefaults, VatMode};
use rust_decimal::Decimal;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub documents: DocumentDefaults,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!(
                "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
            documents: document_defaults_from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;

        for (name, value) in [
            ("DEFAULT_RETENTION_PERCENT", self.documents.retention_percent),
            ("DEFAULT_CIS_PERCENT", self.documents.cis_percent),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(AppError::configuration(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn document_defaults_from_env() -> Result<DocumentDefaults> {
    let fallback = DocumentDefaults::default();

    Ok(DocumentDefaults {
        vat_mode: match env::var("DEFAULT_VAT_MODE") {
            Ok(raw) => raw
                .parse::<VatMode>()
                .map_err(|e| AppError::configuration(format!("Invalid DEFAULT_VAT_MODE: {}", e)))?,
            Err(_) => fallback.vat_mode,
        },
        retention_percent: percent_from_env("DEFAULT_RETENTION_PERCENT", fallback.retention_percent)?,
        cis_percent: percent_from_env("DEFAULT_CIS_PERCENT", fallback.cis_percent)?,
    })
}

fn percent_from_env(name: &str, fallback: Decimal) -> Result<Decimal> {
    match env::var(name) {
        Ok(raw) => parse_decimal(&raw)
            .ok_or_else(|| AppError::configuration(format!("Invalid {}", name))),
        Err(_) => Ok(fallback),
    }
}
