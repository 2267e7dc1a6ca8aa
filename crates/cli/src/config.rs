use persistence::db::DatabaseConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CM__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CM").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [database]
            host = "localhost"
            port = 5432
            database = "netology_db"
            username = "postgres"
            password = ""
            connect_timeout_secs = 10

            [logging]
            level = "info"
            format = "pretty"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database.database.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "CM__DATABASE__DATABASE must name the database".to_string(),
            ));
        }

        if self.database.username.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "CM__DATABASE__USERNAME must be set".to_string(),
            ));
        }

        if self.database.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Database port cannot be 0".to_string(),
            ));
        }

        if self.database.connect_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "connect_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.database, "netology_db");
        assert_eq!(config.database.username, "postgres");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_override() {
        let config = Config::load_for_test(&[
            ("database.host", "db.internal"),
            ("database.port", "6432"),
            ("database.password", "b2u18"),
            ("logging.format", "json"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6432);
        assert_eq!(config.database.password, "b2u18");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_validation_missing_username() {
        let config =
            Config::load_for_test(&[("database.username", "")]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("CM__DATABASE__USERNAME"));
    }

    #[test]
    fn test_config_validation_missing_database() {
        let config =
            Config::load_for_test(&[("database.database", "")]).expect("Failed to load config");
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = Config::load_for_test(&[("database.connect_timeout_secs", "0")])
            .expect("Failed to load config");

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("connect_timeout_secs"));
    }
}
