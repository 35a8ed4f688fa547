//! Process configuration read once at startup.
//!
//! Credentials come from the environment (optionally seeded from a `.env`
//! file) and are never modified afterwards. Handlers reach them through the
//! shared [`MflClient`](crate::client::MflClient).

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "MYFANTASYLEAGUE_API_KEY";
pub const LEAGUE_ID_VAR: &str = "MYFANTASYLEAGUE_LEAGUE_ID";
pub const YEAR_VAR: &str = "MYFANTASYLEAGUE_YEAR";
pub const LEAGUE_HOST_VAR: &str = "MFL_LEAGUE_HOST";
pub const NFL_HOST_VAR: &str = "MFL_NFL_HOST";

const DEFAULT_YEAR: u16 = 2024;
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Sent as `APIKEY` on league and account requests.
    pub api_key: String,
    /// Sent as `L` on league-scoped requests.
    pub league_id: String,
    pub year: u16,
    /// Export endpoint for league and account data.
    pub league_host: String,
    /// Export endpoint for league-independent NFL data.
    pub nfl_host: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load from the process environment, after applying any `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let api_key = required(API_KEY_VAR)?;
        let league_id = required(LEAGUE_ID_VAR)?;

        let year = parse_or(&lookup, YEAR_VAR, DEFAULT_YEAR)?;
        let host: Ipv4Addr = parse_or(&lookup, "HOST", DEFAULT_HOST)?;
        let port: u16 = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let league_host = lookup(LEAGUE_HOST_VAR)
            .unwrap_or_else(|| format!("https://www44.myfantasyleague.com/{year}/export"));
        let nfl_host = lookup(NFL_HOST_VAR)
            .unwrap_or_else(|| format!("https://api.myfantasyleague.com/{year}/export"));

        Ok(Config {
            api_key,
            league_id,
            year,
            league_host,
            nfl_host,
            bind_addr: SocketAddr::from((host, port)),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        None => Ok(default),
    }
}
