//! Environment configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// How `/api/predict` resolves the owner identity.
///
/// Deployments differ only in this choice; a single policy knob replaces
/// parallel builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicy {
    /// Forecast over every record
    #[default]
    None,
    /// `?email=` query parameter
    Query,
    /// `/api/predict/{email}` path segment
    Path,
    /// `email` field of the JSON body
    Body,
}

impl FromStr for ScopePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "global" => Ok(Self::None),
            "query" => Ok(Self::Query),
            "path" => Ok(Self::Path),
            "body" => Ok(Self::Body),
            other => Err(format!("unknown scope policy '{other}'")),
        }
    }
}

impl fmt::Display for ScopePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Query => "query",
            Self::Path => "path",
            Self::Body => "body",
        };
        f.write_str(name)
    }
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub scope: ScopePolicy,
    pub static_dir: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults on
    /// unset or unparsable values.
    pub fn from_env() -> Self {
        Self {
            host: load_or("HOST", "0.0.0.0".to_string()),
            port: load_or("PORT", 3000),
            scope: load_or("SCOPE_POLICY", ScopePolicy::None),
            static_dir: load_or("STATIC_DIR", "static".to_string()),
        }
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) => value,
        Err(err) => {
            warn!("invalid {key} value {raw:?}: {err}, using default {default}");
            default
        }
    }
}
