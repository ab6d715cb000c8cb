// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default session TTL: 7 days.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Data directory path (user records live under `<data_dir>/users`)
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Session TTL in seconds; also used as the cookie `Max-Age`
    pub session_ttl_secs: u64,
    /// Origin allowed to call the API with credentials (the dev frontend)
    pub cors_origin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            cors_origin: "http://localhost:3001".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file location plus environment
    /// variables prefixed with `MEMBERAREA_`.
    pub fn load() -> Result<Self> {
        Self::load_from("config/default.toml")
    }

    /// Load settings from an explicit file path plus the environment.
    /// The file is optional; the environment always applies on top.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("MEMBERAREA"))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate field values that serde alone cannot reject.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!("invalid log level: {}", self.log_level);
        }
        if self.session_ttl_secs == 0 {
            anyhow::bail!("session_ttl_secs must be positive");
        }
        if self.cors_origin.is_empty() {
            anyhow::bail!("cors_origin must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.log_level = "verbose".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.session_ttl_secs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.cors_origin = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
            bind_addr = "0.0.0.0:8080"
            data_dir = "test_data"
            log_level = "debug"
            session_ttl_secs = 3600
            "#,
        )
        .unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(settings.data_dir, PathBuf::from("test_data"));
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.session_ttl_secs, 3600);
        // unset keys fall back to defaults
        assert_eq!(settings.cors_origin, "http://localhost:3001");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings.log_level, "info");
    }
}
