use crate::core::{AppError, Currency, Result};
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub currency: Currency,
    /// Whole hours east of UTC used to decide "today" (South Africa is +2)
    pub site_utc_offset_hours: i32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                "pretty" | "text" => LogFormat::Pretty,
                other => {
                    return Err(AppError::Configuration(format!(
                        "Invalid LOG_FORMAT: {}",
                        other
                    )))
                }
            },
            currency: env::var("APP_CURRENCY")
                .unwrap_or_else(|_| "ZAR".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
            site_utc_offset_hours: env::var("SITE_UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid SITE_UTC_OFFSET_HOURS".to_string())
                })?,
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(-12..=14).contains(&self.app.site_utc_offset_hours) {
            return Err(AppError::Configuration(format!(
                "SITE_UTC_OFFSET_HOURS must be between -12 and 14, got {}",
                self.app.site_utc_offset_hours
            )));
        }

        self.database.validate()?;
        self.server.validate()?;

        Ok(())
    }
}
