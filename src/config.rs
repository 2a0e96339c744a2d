// Application configuration
// Values come from the environment (optionally via a .env file)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_IDLE_MINUTES: u32 = 120;
pub const DEFAULT_TOP_PLAYERS_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Sessions untouched for this long are discarded. Always at least 1.
    pub session_idle_minutes: u32,
    /// How many players the summary ranks per team
    pub top_players_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            top_players_count: DEFAULT_TOP_PLAYERS_COUNT,
        }
    }
}

impl AppConfig {
    /// Reads `STOMP_HOST`, `STOMP_PORT`, `SESSION_IDLE_MINUTES` and `TOP_PLAYERS_COUNT`
    ///
    /// Unset variables fall back to defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_idle_minutes: u32 = parse_or(
            &lookup,
            "SESSION_IDLE_MINUTES",
            defaults.session_idle_minutes,
        )?;
        if session_idle_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_IDLE_MINUTES",
                value: session_idle_minutes.to_string(),
            });
        }

        Ok(Self {
            host: parse_or(&lookup, "STOMP_HOST", defaults.host)?,
            port: parse_or(&lookup, "STOMP_PORT", defaults.port)?,
            session_idle_minutes,
            top_players_count: parse_or(&lookup, "TOP_PLAYERS_COUNT", defaults.top_players_count)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Any `u32` number of minutes is well inside `chrono::Duration`'s range
    pub fn session_idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.session_idle_minutes))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
