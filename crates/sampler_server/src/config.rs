//! Environment-driven server configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_DB_PATH: &str = "sampler.sqlite3";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Catalog database file, created on first start.
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Always absolute; relative inputs are resolved against the working dir.
    pub log_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr { value: String, reason: String },
    WorkingDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, reason } => {
                write!(f, "invalid SAMPLER_BIND_ADDR `{value}`: {reason}")
            }
            Self::WorkingDir(err) => write!(f, "cannot resolve working directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkingDir(err) => Some(err),
            Self::InvalidBindAddr { .. } => None,
        }
    }
}

impl ServerConfig {
    /// Reads `SAMPLER_DB_PATH`, `SAMPLER_BIND_ADDR`, `SAMPLER_LOG_LEVEL` and
    /// `SAMPLER_LOG_DIR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        Self::from_lookup(&cwd, |name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(
        cwd: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_addr = var("SAMPLER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: err.to_string(),
            })?;

        let log_dir =
            PathBuf::from(var("SAMPLER_LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()));
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            cwd.join(log_dir)
        };

        Ok(Self {
            db_path: PathBuf::from(
                var("SAMPLER_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            ),
            bind_addr,
            log_level: var("SAMPLER_LOG_LEVEL")
                .unwrap_or_else(|| sampler_core::default_log_level().to_string()),
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig};
    use std::collections::HashMap;
    use std::path::Path;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config =
            ServerConfig::from_lookup(Path::new("/srv"), lookup(&[("SAMPLER_DB_PATH", "  ")]))
                .unwrap();
        assert_eq!(config.db_path, Path::new("sampler.sqlite3"));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_dir, Path::new("/srv/logs"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ServerConfig::from_lookup(
            Path::new("/srv"),
            lookup(&[
                ("SAMPLER_DB_PATH", "/data/catalog.db"),
                ("SAMPLER_BIND_ADDR", "127.0.0.1:8080"),
                ("SAMPLER_LOG_LEVEL", "warn"),
                ("SAMPLER_LOG_DIR", "/var/log/sampler"),
            ]),
        )
        .unwrap();
        assert_eq!(config.db_path, Path::new("/data/catalog.db"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Path::new("/var/log/sampler"));
    }

    #[test]
    fn malformed_bind_addr_is_rejected() {
        let err = ServerConfig::from_lookup(
            Path::new("/srv"),
            lookup(&[("SAMPLER_BIND_ADDR", "localhost")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }
}
