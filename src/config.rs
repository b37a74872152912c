//! Configuration loading and constants.
//!
//! Runtime settings come from the process environment (`PORT`, `RUST_LOG`,
//! `LOG_FORMAT`). Build metadata is fixed at compile time by `build.rs` and
//! collected once into [`BuildInfo`], which handlers receive through the
//! application state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use const_format::formatcp;

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port to listen on
pub const PORT_ENV: &str = "PORT";

/// Log output format, `text` or `json`
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Standard tracing filter variable
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on every interface
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"));

/// Version reported when the build does not provide one
pub const DEFAULT_VERSION: &str = "dev";

/// Placeholder for build metadata the build did not provide
pub const UNKNOWN: &str = "unknown";

// =============================================================================
// Build Metadata
// =============================================================================

/// Unset and empty build variables both resolve to `default`.
const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Release version, set through `HELLO_SERVER_VERSION` at build time
pub const BUILD_VERSION: &str = or_default(option_env!("HELLO_SERVER_VERSION"), DEFAULT_VERSION);

/// Source commit, set through `HELLO_SERVER_COMMIT` at build time
pub const BUILD_COMMIT: &str = or_default(option_env!("HELLO_SERVER_COMMIT"), UNKNOWN);

/// Build date, set through `HELLO_SERVER_BUILD_DATE` at build time
pub const BUILD_DATE: &str = or_default(option_env!("HELLO_SERVER_BUILD_DATE"), UNKNOWN);

/// Compiler that produced this binary
pub const RUSTC_VERSION: &str = or_default(option_env!("HELLO_SERVER_RUSTC_VERSION"), UNKNOWN);

/// Immutable build metadata, populated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub build_date: String,
    pub runtime_version: String,
    /// `<os>/<arch>` of the running binary
    pub platform: String,
}

impl BuildInfo {
    /// Collects the metadata baked in by `build.rs`.
    pub fn from_build_env() -> Self {
        Self {
            version: BUILD_VERSION.to_string(),
            commit: BUILD_COMMIT.to_string(),
            build_date: BUILD_DATE.to_string(),
            runtime_version: RUSTC_VERSION.to_string(),
            platform: current_platform(),
        }
    }
}

/// Platform string in `<os>/<arch>` form, e.g. `linux/x86_64`.
pub fn current_platform() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// HTTP listener configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpServerConfig {
    /// Reads the listen port from `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Builds the config from the raw value of `PORT`.
    ///
    /// Unset and empty both fall back to [`DEFAULT_PORT`].
    pub fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let port = match value.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };

        Ok(Self {
            host: DEFAULT_HOST,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Parses the raw value of `LOG_FORMAT`; unset and empty mean text.
    pub fn from_format_var(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a port number between 0 and 65535")]
    InvalidPort(String),
    #[error("Invalid LOG_FORMAT value '{0}': expected 'text' or 'json'")]
    InvalidLogFormat(String),
}
