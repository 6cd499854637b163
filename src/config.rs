//! Configuration management for the attendance backend
//!
//! Handles environment variables and application settings.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::info;

/// Deployment profile for the check-in workflow
///
/// The two observed deployments disagree on whether a typed-name field
/// exists, so both are first-class profiles of the same core.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WorkflowProfile {
    /// The user only picks a name; no typed-name field
    SelectionOnly,

    /// A typed name must exist in the roster and match the selection
    TypedName,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Roster document location (file path or http(s) URL); when unset,
    /// the compiled-in roster is used
    pub roster_source: Option<String>,

    /// Workflow deployment profile
    pub profile: WorkflowProfile,

    /// IANA timezone name for submission display timestamps
    pub timezone: String,

    /// Environment (development, production)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// CORS origins (empty means allow all)
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            roster_source: None,
            profile: WorkflowProfile::SelectionOnly,
            timezone: "UTC".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            cors_origins: vec![],
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("ATS_HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("ATS_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        // Roster document
        if let Ok(roster_source) = env::var("ATS_ROSTER_SOURCE") {
            config.roster_source = Some(roster_source);
        }

        // Workflow profile
        if let Ok(profile) = env::var("ATS_PROFILE") {
            config.profile = WorkflowProfile::from_str(&profile)
                .map_err(|_| ConfigError::InvalidProfile(profile))?;
        }

        // Timestamp timezone
        if let Ok(timezone) = env::var("ATS_TIMEZONE") {
            config.timezone = timezone;
        }

        // Environment
        if let Ok(environment) = env::var("ATS_ENVIRONMENT") {
            config.environment = environment;
        }

        // Logging
        if let Ok(log_level) = env::var("ATS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        // CORS origins
        if let Ok(cors_origins) = env::var("ATS_CORS_ORIGINS") {
            config.cors_origins = cors_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        if let Some(source) = &self.roster_source {
            if source.trim().is_empty() {
                return Err(ConfigError::EmptyRosterSource);
            }
        }

        Tz::from_str(&self.timezone)
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))?;

        Ok(())
    }

    /// The parsed display timezone; validated at load, UTC as last resort
    pub fn display_timezone(&self) -> Tz {
        Tz::from_str(&self.timezone).unwrap_or(chrono_tz::UTC)
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Log configuration
    pub fn log_config(&self) {
        info!("Configuration loaded:");
        info!("  Environment: {}", self.environment);
        info!("  Bind address: {}", self.bind_address());
        info!(
            "  Roster source: {}",
            self.roster_source.as_deref().unwrap_or("<builtin roster>")
        );
        info!("  Workflow profile: {}", self.profile);
        info!("  Timezone: {}", self.timezone);
        info!("  Log level: {}", self.log_level);
        info!("  CORS origins: {:?}", self.cors_origins);
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid workflow profile: {0} (expected selection-only or typed-name)")]
    InvalidProfile(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Roster source is set but empty")]
    EmptyRosterSource,
}
