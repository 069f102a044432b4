//! Service configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub backend_timeout: Duration,
    /// JSON intent catalog; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Seed for reproducible reply selection
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
            catalog_path: None,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("KRISHI_PORT") {
            Some(v) => parse(&v, "KRISHI_PORT", "a port number")?,
            None => defaults.port,
        };
        let backend_timeout = match get("KRISHI_BACKEND_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = parse(&v, "KRISHI_BACKEND_TIMEOUT_SECS", "a positive integer")?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: "KRISHI_BACKEND_TIMEOUT_SECS",
                        expected: "a positive integer",
                        value: v,
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.backend_timeout,
        };
        let rng_seed = get("KRISHI_RNG_SEED")
            .map(|v| parse(&v, "KRISHI_RNG_SEED", "an unsigned 64-bit integer"))
            .transpose()?;

        Ok(Self {
            port,
            backend_url: get("KRISHI_BACKEND_URL").unwrap_or(defaults.backend_url),
            backend_timeout,
            catalog_path: get("KRISHI_CATALOG_PATH").map(PathBuf::from),
            rng_seed,
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}
