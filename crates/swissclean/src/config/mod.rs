use std::env;
use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOCALE: &str = "de";

/// Deployment stage, read from `APP_ENV`. Anything unrecognized counts as
/// development so a bare checkout runs without ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn detect(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application, assembled from the process
/// environment (a local `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub quotes: QuoteConfig,
}

fn var_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::detect(&var_or("APP_ENV", "development"));

        let port_raw = var_or("APP_PORT", &DEFAULT_PORT.to_string());
        let port = port_raw.parse().map_err(|source| ConfigError::Port {
            value: port_raw,
            source,
        })?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host: var_or("APP_HOST", DEFAULT_HOST),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: var_or("APP_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            },
            quotes: QuoteConfig {
                locale: var_or("APP_LOCALE", DEFAULT_LOCALE),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` is accepted as a convenience alias for the loopback
    /// address; every other host must be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host.parse().map_err(|source| ConfigError::Host {
                value: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Display-string selection for the quote calculator.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub locale: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Port {
        value: String,
        source: ParseIntError,
    },
    Host {
        value: String,
        source: AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Port { value, .. } => {
                write!(f, "APP_PORT '{value}' is not a valid port number")
            }
            ConfigError::Host { value, .. } => {
                write!(f, "APP_HOST '{value}' is neither an IP address nor 'localhost'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Port { source, .. } => Some(source),
            ConfigError::Host { source, .. } => Some(source),
        }
    }
}
