use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub debug: bool,
    /// Upper bound on the outbound fetch. `None` leaves it unbounded.
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let debug = lookup("DEBUG").map(|v| parse_flag(&v)).unwrap_or(false);

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::ConfigError(format!("Invalid fetch timeout: {}", e)))?;
                if secs == 0 {
                    return Err(AppError::ConfigError("Fetch timeout must be positive".to_string()));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            debug,
            fetch_timeout,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(!config.debug);
        assert!(config.fetch_timeout.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEBUG", "True"),
            ("FETCH_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:8080".parse().unwrap());
        assert!(config.debug);
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_port() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg.starts_with("Invalid port")));
    }

    #[test]
    fn rejects_bad_host() {
        let err = load(&[("HOST", "localhost")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg.starts_with("Invalid host address")));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(load(&[("FETCH_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("FETCH_TIMEOUT_SECS", "soon")]).is_err());
    }

    #[test]
    fn unrecognised_debug_value_is_off() {
        let config = load(&[("DEBUG", "maybe")]).unwrap();
        assert!(!config.debug);
    }
}
