//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw credential list, format `user1:pass1,user2:pass2,...`
    pub user_credentials: String,

    /// Server port to bind to
    pub port: u16,
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `USER_CREDENTIALS`: comma-separated `user:pass` pairs
    ///
    /// Optional environment variables:
    /// - `PORT`: server port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_credentials = std::env::var("USER_CREDENTIALS").map_err(|_| ConfigError {
            field: "USER_CREDENTIALS".to_string(),
            message: "Required environment variable not set".to_string(),
        })?;

        let port = parse_env_or("PORT", 8080)?;

        let config = Self {
            user_credentials,
            port,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.user_credentials.is_empty() {
            return Err(ConfigError {
                field: "USER_CREDENTIALS".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse an environment variable or return a default value.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val.parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        Err(_) => Ok(default),
    }
}
