//! Server configuration read from the environment

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Largest accepted upload body, in bytes
    pub max_upload_bytes: usize,
    /// Load the sample question set at startup
    pub seed_questions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            seed_questions: true,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `MAX_UPLOAD_BYTES` and `SEED_QUESTIONS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", value))?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value.parse().with_context(|| {
                format!("MAX_UPLOAD_BYTES must be a byte count, got {:?}", value)
            })?,
            None => defaults.max_upload_bytes,
        };

        let seed_questions = match lookup("SEED_QUESTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("SEED_QUESTIONS must be true or false, got {:?}", value))?,
            None => defaults.seed_questions,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            max_upload_bytes,
            seed_questions,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("SEED_QUESTIONS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(!config.seed_questions);
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = Config::from_lookup(lookup(&[("PORT", "http")]));
        assert!(result.is_err());
    }
}
