//! Process configuration.
//!
//! The environment is read exactly once, here, at startup. Everything
//! downstream receives the loaded values by injection, so nothing else in
//! the codebase touches `std::env`.

use std::net::SocketAddr;

use thiserror::Error;

use stockbot_notion::DatabaseId;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment-supplied configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token for the command platform's Web API (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Secret for verifying inbound request signatures
    /// (`SLACK_SIGNING_SECRET`).
    pub slack_signing_secret: String,
    /// Token for the database service (`NOTION_API_KEY`).
    pub notion_api_key: String,
    /// The inventory database to query (`NOTION_DATABASE_ID`).
    pub notion_database_id: DatabaseId,
    /// Listen address for the command webhook (`BIND_ADDR`, optional).
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank. Named so the operator can fix
    /// it without reading source.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    /// A variable is set but unusable.
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Tests inject maps here
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                message: e.to_string(),
            })?;

        Ok(Self {
            slack_bot_token: require(&lookup, "SLACK_BOT_TOKEN")?,
            slack_signing_secret: require(&lookup, "SLACK_SIGNING_SECRET")?,
            notion_api_key: require(&lookup, "NOTION_API_KEY")?,
            notion_database_id: DatabaseId::new(require(&lookup, "NOTION_DATABASE_ID")?),
            bind_addr,
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_env(name: &str) -> Option<String> {
        match name {
            "SLACK_BOT_TOKEN" => Some("xoxb-test".to_string()),
            "SLACK_SIGNING_SECRET" => Some("sssh".to_string()),
            "NOTION_API_KEY" => Some("secret_abc".to_string()),
            "NOTION_DATABASE_ID" => Some("59833787-2cf9-4fdf-8782-e53db20768a5".to_string()),
            _ => None,
        }
    }

    #[test]
    fn loads_a_complete_environment() {
        let config = Config::from_lookup(complete_env).unwrap();
        assert_eq!(config.slack_bot_token, "xoxb-test");
        assert_eq!(
            config.notion_database_id.as_str(),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn missing_variables_are_reported_by_name() {
        let err = Config::from_lookup(|name| {
            complete_env(name).filter(|_| name != "NOTION_API_KEY")
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("NOTION_API_KEY"));
        assert!(err.to_string().contains("NOTION_API_KEY"));
    }

    #[test]
    fn blank_variables_count_as_missing() {
        let err = Config::from_lookup(|name| match name {
            "SLACK_BOT_TOKEN" => Some("   ".to_string()),
            other => complete_env(other),
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SLACK_BOT_TOKEN"));
    }

    #[test]
    fn bind_addr_is_overridable_and_validated() {
        let config = Config::from_lookup(|name| match name {
            "BIND_ADDR" => Some("127.0.0.1:9999".to_string()),
            other => complete_env(other),
        })
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9999".parse().unwrap());

        let err = Config::from_lookup(|name| match name {
            "BIND_ADDR" => Some("not-an-addr".to_string()),
            other => complete_env(other),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }
}
