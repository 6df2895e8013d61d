//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the gigbook API
//! server from environment variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_BUFFER_HOURS`: Minimum separation between two shows of one artist (default: 2, at most 8784)

use eyre::{Result, WrapErr};
use gigbook_core::availability::{DEFAULT_BUFFER_HOURS, MAX_BUFFER_HOURS};
use std::env;
use tracing::Level;

/// Configuration for the gigbook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Conflict buffer applied when booking shows, in hours
    pub booking_buffer_hours: i64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The BOOKING_BUFFER_HOURS value is not an integer between 0 and one year of hours
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking settings
        let booking_buffer_hours = match env::var("BOOKING_BUFFER_HOURS") {
            Ok(value) => parse_buffer_hours(&value)?,
            Err(_) => DEFAULT_BUFFER_HOURS,
        };

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            booking_buffer_hours,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_buffer_hours(value: &str) -> Result<i64> {
    let hours: i64 = value
        .trim()
        .parse()
        .wrap_err("Invalid BOOKING_BUFFER_HOURS value")?;
    if !(0..=MAX_BUFFER_HOURS).contains(&hours) {
        eyre::bail!(
            "BOOKING_BUFFER_HOURS must be between 0 and {}, got {}",
            MAX_BUFFER_HOURS,
            hours
        );
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("debug"), Level::DEBUG);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_parse_buffer_hours() {
        assert_eq!(parse_buffer_hours("2").unwrap(), 2);
        assert_eq!(parse_buffer_hours(" 0 ").unwrap(), 0);
        assert!(parse_buffer_hours("-1").is_err());
        assert!(parse_buffer_hours("two").is_err());
    }

    #[test]
    fn test_parse_buffer_hours_rejects_oversized_values() {
        assert_eq!(
            parse_buffer_hours(&MAX_BUFFER_HOURS.to_string()).unwrap(),
            MAX_BUFFER_HOURS
        );
        assert!(parse_buffer_hours("10000000000").is_err());
        assert!(parse_buffer_hours(&i64::MAX.to_string()).is_err());
    }

    #[test]
    fn test_server_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "postgres://localhost/gigbook".to_string(),
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            booking_buffer_hours: 2,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
