//! Database connection settings.
//!
//! # Responsibility
//! - Describe where the SQLite store lives and how long to wait on locks.
//! - Load those settings from a JSON document.
//!
//! # Invariants
//! - A loaded config always has a non-empty `db_path`.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Connection settings consumed by `db::open_db_with_config`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    /// SQLite database file path.
    pub db_path: PathBuf,
    /// Busy timeout applied to the connection, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl DbConfig {
    /// Builds a config for `db_path` with default timeouts.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Parses a JSON config document.
    ///
    /// # Errors
    /// - `Parse` when the document is not valid JSON for this shape.
    /// - `Invalid` when `db_path` is blank.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::Invalid("db_path cannot be empty".to_string()));
        }
        Ok(())
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DbConfig};
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn parses_config_and_applies_default_timeout() {
        let config = DbConfig::from_json_str(r#"{ "db_path": "/tmp/sales.db" }"#).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/sales.db"));
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn explicit_timeout_overrides_default() {
        let config =
            DbConfig::from_json_str(r#"{ "db_path": "sales.db", "busy_timeout_ms": 250 }"#)
                .unwrap();
        assert_eq!(config.busy_timeout_ms, 250);
    }

    #[test]
    fn blank_path_is_rejected() {
        let err = DbConfig::from_json_str(r#"{ "db_path": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = DbConfig::from_json_str("{ db_path = 1 }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DbConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
