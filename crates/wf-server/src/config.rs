//! Server configuration, read from a TOML file.
//!
//! ```toml
//! bind = "127.0.0.1:8080"
//! dist_dir = "app/leptos-ui/dist"
//! locales_dir = "app/leptos-ui/public/locales"
//! log_json = false
//! log_level = "info"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ServerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Trunk output directory holding `index.html` and the WASM bundle.
    pub dist_dir: PathBuf,
    /// Directory laid out as `{lng}/translation.json`.
    pub locales_dir: PathBuf,
    pub log_json: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".into(),
            dist_dir: PathBuf::from("app/leptos-ui/dist"),
            locales_dir: PathBuf::from("app/leptos-ui/public/locales"),
            log_json: false,
            log_level: "info".into(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        let cfg: ServerConfig =
            toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        let Some(path) = path else {
            info!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        self.bind
            .parse()
            .map_err(|_| ServerError::Config(format!("invalid bind address: {}", self.bind)))
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        self.bind_addr()?;
        if self.dist_dir.as_os_str().is_empty() {
            return Err(ServerError::Config("dist_dir must not be empty".into()));
        }
        if self.locales_dir.as_os_str().is_empty() {
            return Err(ServerError::Config("locales_dir must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ServerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = ServerConfig::from_toml_str("bind = \"0.0.0.0:3000\"\nlog_json = true\n").unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:3000");
        assert!(cfg.log_json);
        assert_eq!(cfg.dist_dir, PathBuf::from("app/leptos-ui/dist"));
    }

    #[test]
    fn rejects_bad_bind() {
        let err = ServerConfig::from_toml_str("bind = \"localhost\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            ServerConfig::from_toml_str("bind = ["),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ServerConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ServerError::Io { .. }));
        assert_eq!(ServerConfig::load(None).unwrap(), ServerConfig::default());
    }
}
