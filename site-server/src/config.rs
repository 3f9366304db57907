//! # Server Configuration
//!
//! Loaded from environment variables; `.env` is honoured through `dotenvy` in
//! `main`. Validated before the listener is bound so a bad deploy fails fast.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Result, ServerError};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `SITE_BIND_ADDRESS`
    pub bind_address: SocketAddr,
    /// `SITE_DIST_DIR`: the Trunk output directory.
    pub dist_dir: PathBuf,
    /// `LOG_LEVEL`, lower-cased. Unknown levels fall back to `info`.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address = lookup("SITE_BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse().map_err(|e| {
            ServerError::Config(format!("SITE_BIND_ADDRESS '{bind_address}' is not a socket address: {e}"))
        })?;

        let dist_dir = PathBuf::from(lookup("SITE_DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()));

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .filter(|level| LOG_LEVELS.contains(&level.as_str()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            bind_address,
            dist_dir,
            log_level,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// The bundle must be built before it can be served.
    pub fn validate(&self) -> Result<()> {
        if !self.dist_dir.is_dir() {
            return Err(ServerError::Config(format!(
                "SITE_DIST_DIR '{}' is not a directory (run `trunk build` first)",
                self.dist_dir.display()
            )));
        }

        if !self.index_file().is_file() {
            return Err(ServerError::Config(format!(
                "No index.html in '{}'",
                self.dist_dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SITE_BIND_ADDRESS", "0.0.0.0:3000"),
            ("SITE_DIST_DIR", "site-web/dist"),
            ("LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("site-web/dist"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bad_bind_address() {
        let err = ServerConfig::from_lookup(lookup(&[("SITE_BIND_ADDRESS", "localhost")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_validate_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().to_string_lossy().into_owned();
        let config = ServerConfig::from_lookup(lookup(&[("SITE_DIST_DIR", dist.as_str())])).unwrap();
        assert!(config.validate().is_err());

        std::fs::write(config.index_file(), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_dir() {
        let config = ServerConfig::from_lookup(lookup(&[("SITE_DIST_DIR", "/no/such/dist")])).unwrap();
        assert!(config.validate().is_err());
    }
}
