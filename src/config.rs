//! Configuration loader for the `sensorflow-api` service.
//!
//! All runtime configuration values and their defaults live here. Values come
//! from environment variables (with optional `.env` support provided by the
//! caller), so no other module calls `env::var` for service settings.
use std::env;

use anyhow::{anyhow, Result};

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Parse an optional `u16` variable from `$lookup`, treating empty as unset.
macro_rules! parse_opt_u16 {
    ($lookup:expr, $var_name:expr, $default:expr) => {
        $lookup($var_name)
            .filter(|v: &String| !v.is_empty())
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// Loaded once at startup and passed by value into the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // ---
    /// TCP port the HTTP listener binds on all interfaces.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Load configuration from the process environment.
///
/// Optional:
/// - `PORT` – listen port (default: 8080)
pub fn load_from_env() -> Result<Config> {
    // ---
    from_lookup(|key| env::var(key).ok())
}

/// Build a [`Config`] from an arbitrary key lookup.
///
/// Returns an error if `PORT` is set to something other than a valid `u16`.
pub fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let port = parse_opt_u16!(lookup, "PORT", DEFAULT_PORT);

    Ok(Config { port })
}

impl Config {
    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  PORT : {}", self.port);
    }
}
