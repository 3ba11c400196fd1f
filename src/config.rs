//! Configuration loading and constants.
//!
//! Settings come from the process environment (optionally seeded from a `.env`
//! file by the binary). Every value has a default, so an empty environment is a
//! valid configuration: bind `0.0.0.0:3000` and serve `index.html`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Health responses are never stored by caches
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Home page responses must be revalidated; the file can change under us
pub const CACHE_CONTROL_HOME: &str = "no-cache";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PAGE_PATH: &str = "PAGE_PATH";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Listen on all interfaces
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// HTML file served by `/home`, relative to the working directory
pub const DEFAULT_PAGE_PATH: &str = "index.html";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "first_app=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind
    pub host: IpAddr,
    /// TCP port to bind
    pub port: u16,
    /// Location of the home page file
    pub page_path: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            page_path: PathBuf::from(DEFAULT_PAGE_PATH),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup(ENV_PORT)
            .map(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_PORT);

        let host = match lookup(ENV_HOST).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, fallback = %DEFAULT_HOST, "Invalid HOST, using default");
                DEFAULT_HOST
            }),
            None => DEFAULT_HOST,
        };

        let page_path = lookup(ENV_PAGE_PATH)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE_PATH));

        let logging = LoggingConfig {
            format: lookup(ENV_LOG_FORMAT)
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
        };

        Self {
            host,
            port,
            page_path,
            logging,
        }
    }

    /// Socket address the listener binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a `PORT` value, falling back to [`DEFAULT_PORT`].
///
/// Empty strings fall back silently; anything else that is not a positive
/// 16-bit integer is logged first.
fn parse_port(raw: &str) -> u16 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PORT;
    }
    match trimmed.parse::<u16>() {
        Ok(port) if port > 0 => port,
        _ => {
            tracing::warn!(value = %raw, fallback = DEFAULT_PORT, "Invalid PORT, using default");
            DEFAULT_PORT
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Case-insensitive parse; unknown values mean text.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_port_from_environment() {
        let config = config_from(&[("PORT", "8080")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr().port(), 8080);
    }

    #[test]
    fn test_port_with_surrounding_whitespace() {
        assert_eq!(config_from(&[("PORT", " 4000\n")]).port, 4000);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        for raw in ["", "abc", "0", "-1", "65536", "80.5"] {
            assert_eq!(config_from(&[("PORT", raw)]).port, DEFAULT_PORT, "PORT={raw:?}");
        }
    }

    #[test]
    fn test_host_override() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "9000")]);
        assert_eq!(config.addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_host_falls_back() {
        assert_eq!(config_from(&[("HOST", "not-an-ip")]).host, DEFAULT_HOST);
    }

    #[test]
    fn test_page_path_override() {
        let config = config_from(&[("PAGE_PATH", "public/landing.html")]);
        assert_eq!(config.page_path, PathBuf::from("public/landing.html"));
    }

    #[test]
    fn test_log_format() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
        assert_eq!(
            config_from(&[("LOG_FORMAT", "json")]).logging.format,
            LogFormat::Json
        );
    }
}
