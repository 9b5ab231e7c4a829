//! Host configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `CONSOLE_HOST` | `127.0.0.1` |
//! | `CONSOLE_PORT` | `8080` |
//! | `CONSOLE_OPEN_BROWSER` | `true` |

use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("CONSOLE_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("CONSOLE_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = read("CONSOLE_HOST").unwrap_or(defaults.host);
        let port = match read("CONSOLE_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let open_browser = match read("CONSOLE_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => defaults.open_browser,
        };

        Ok(Self { host, port, open_browser })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(HostConfig::from_lookup(lookup(&[])), Ok(HostConfig::default()));
    }

    #[test]
    fn reads_overrides() {
        let config = HostConfig::from_lookup(lookup(&[
            ("CONSOLE_HOST", "0.0.0.0"),
            ("CONSOLE_PORT", " 9000 "),
            ("CONSOLE_OPEN_BROWSER", "off"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("CONSOLE_PORT", "80a")])),
            Err(ConfigError::InvalidPort("80a".into()))
        );
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("CONSOLE_OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidFlag("maybe".into()))
        );
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = HostConfig::from_lookup(lookup(&[("CONSOLE_HOST", "  ")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }
}
