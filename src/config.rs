use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_INDEX_FILE: &str = "static/index.html";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide settings, read once at startup and handed to the router.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_key: String,
    pub upstream_timeout: Duration,
    pub index_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "UPSTREAM_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            upstream_url: lookup("HOST_URL").unwrap_or_default(),
            upstream_key: lookup("HOST_KEY").unwrap_or_default(),
            upstream_timeout: Duration::from_secs(timeout_secs),
            index_file: lookup("INDEX_FILE")
                .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string())
                .into(),
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value: self.host.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("upstream_url", &self.upstream_url)
            .field("upstream_key", &"<redacted>")
            .field("upstream_timeout", &self.upstream_timeout)
            .field("index_file", &self.index_file)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url, "");
        assert_eq!(config.upstream_key, "");
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
        assert_eq!(config.index_file, PathBuf::from("static/index.html"));
    }

    #[test]
    fn test_reads_upstream_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST_URL", "https://tts.example.com/v1/synthesize"),
            ("HOST_KEY", "secret"),
            ("PORT", "9000"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.upstream_url, "https://tts.example.com/v1/synthesize");
        assert_eq!(config.upstream_key, "secret");
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "UPSTREAM_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn test_listen_addr() {
        let config =
            Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")])).unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = Config::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap();
        assert!(bad.listen_addr().is_err());
    }

    #[test]
    fn test_listen_addr_ipv6() {
        let any = Config::from_lookup(lookup_from(&[("HOST", "::")])).unwrap();
        assert_eq!(any.listen_addr().unwrap().to_string(), "[::]:8080");

        let loopback =
            Config::from_lookup(lookup_from(&[("HOST", "[::1]"), ("PORT", "3000")])).unwrap();
        assert_eq!(loopback.listen_addr().unwrap().to_string(), "[::1]:3000");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[("HOST_KEY", "top-secret")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
