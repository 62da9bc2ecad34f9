//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use songbook_details_client::DETAILS_URL_VARS;
use songbook_shared_config::{first_env, CommonConfig, DatabaseConfig, Environment};

/// Port used when neither `PORT` nor `HOST_PORT` is set
const DEFAULT_PORT: u16 = 8080;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 8080)
    pub port: u16,

    /// Song metadata lookup endpoint (optional)
    pub details_api_url: Option<String>,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode an explicit `DATABASE_URL` (or `DB_URL`) is
    /// required. In development/staging mode the local default is used.
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_env();

        if environment.is_production() {
            Self::validate_database_url()?;
        }

        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        let port = match first_env(&["PORT", "HOST_PORT"]) {
            Some(raw) => parse_port(&raw).with_context(|| format!("Invalid port value '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            common,
            port,
            details_api_url: first_env(&DETAILS_URL_VARS),
            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Validate that the database URL is explicitly set in production
    fn validate_database_url() -> Result<()> {
        if first_env(&["DATABASE_URL", "DB_URL"]).is_none() {
            bail!(
                "DATABASE_URL environment variable is required in production. \
                 Please set your PostgreSQL connection string."
            );
        }
        Ok(())
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

/// Parse a listen port written as `8080`, `:8080` or `host:8080`
fn parse_port(raw: &str) -> Result<u16> {
    let raw = raw.trim();
    let port = raw.rsplit_once(':').map_or(raw, |(_, port)| port);
    port.parse::<u16>()
        .with_context(|| format!("'{}' is not a valid port number", port))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_VARS: [&str; 9] = [
        "ENVIRONMENT",
        "DATABASE_URL",
        "DB_URL",
        "PORT",
        "HOST_PORT",
        "SONG_DETAILS_URL",
        "EXTERNAL_API_URL",
        "CORS_ORIGINS",
        "LOG_LEVEL",
    ];

    fn with_config_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> =
            CONFIG_VARS.iter().map(|name| (*name, None)).collect();
        for (name, value) in vars {
            all.retain(|(existing, _)| existing != name);
            all.push((*name, Some(*value)));
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_parse_port_forms() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(":9000").unwrap(), 9000);
        assert_eq!(parse_port("0.0.0.0:3000").unwrap(), 3000);
        assert_eq!(parse_port(" 8081 ").unwrap(), 8081);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        assert!(parse_port("http").is_err());
        assert!(parse_port(":").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_defaults_in_development() {
        with_config_env(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert!(config.details_api_url.is_none());
            assert!(config.cors_allowed_origins.is_none());
            assert_eq!(config.environment(), Environment::Development);
            assert!(config.database().url.starts_with("postgres://"));
        });
    }

    #[test]
    fn test_log_level_is_carried_for_tracing() {
        with_config_env(&[("LOG_LEVEL", "debug")], || {
            assert_eq!(Config::from_env().unwrap().common.log_level, "debug");
        });
        with_config_env(&[], || {
            assert_eq!(Config::from_env().unwrap().common.log_level, "info");
        });
    }

    #[test]
    fn test_host_port_fallback() {
        with_config_env(&[("HOST_PORT", ":8088")], || {
            assert_eq!(Config::from_env().unwrap().port, 8088);
        });
    }

    #[test]
    fn test_port_wins_over_host_port() {
        with_config_env(&[("PORT", "7000"), ("HOST_PORT", ":8088")], || {
            assert_eq!(Config::from_env().unwrap().port, 7000);
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        with_config_env(&[("PORT", "eighty")], || {
            let err = Config::from_env().unwrap_err().to_string();
            assert!(err.contains("Invalid port value"));
        });
    }

    #[test]
    fn test_details_url_with_legacy_name() {
        with_config_env(&[("EXTERNAL_API_URL", "http://lookup.local/info")], || {
            assert_eq!(
                Config::from_env().unwrap().details_api_url.as_deref(),
                Some("http://lookup.local/info")
            );
        });
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        with_config_env(
            &[("CORS_ORIGINS", "http://a.test, http://b.test,,")],
            || {
                assert_eq!(
                    Config::from_env().unwrap().cors_allowed_origins,
                    Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
                );
            },
        );
    }

    #[test]
    fn test_database_url_required_in_production() {
        with_config_env(&[("ENVIRONMENT", "production")], || {
            let err = Config::from_env().unwrap_err().to_string();
            assert!(err.contains("DATABASE_URL"));
            assert!(err.contains("required in production"));
        });
    }

    #[test]
    fn test_legacy_db_url_accepted_in_production() {
        with_config_env(
            &[
                ("ENVIRONMENT", "production"),
                ("DB_URL", "postgres://user:pass@db/songs"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.is_production());
                assert_eq!(config.database().url, "postgres://user:pass@db/songs");
            },
        );
    }
}
