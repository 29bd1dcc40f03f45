//! Environment-driven configuration helpers.
//!
//! Binaries read their settings once at startup through a lookup function so
//! the parsing can be exercised without touching the process environment.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port in {var}: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a string setting, falling back to `default` when unset or blank.
pub fn read_string<F>(lookup: &F, var: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read a TCP port, falling back to `default` when unset.
pub fn read_port<F>(lookup: &F, var: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_values_use_defaults() {
        let env = lookup(&[]);
        assert_eq!(read_string(&env, "HOST", "localhost"), "localhost");
        assert_eq!(read_port(&env, "PORT", 7001), Ok(7001));
    }

    #[test]
    fn set_values_are_parsed() {
        let env = lookup(&[("HOST", " product "), ("PORT", "8080")]);
        assert_eq!(read_string(&env, "HOST", "localhost"), "product");
        assert_eq!(read_port(&env, "PORT", 7001), Ok(8080));
    }

    #[test]
    fn bad_port_is_rejected() {
        let env = lookup(&[("PORT", "seventy")]);
        assert_eq!(
            read_port(&env, "PORT", 7001),
            Err(ConfigError::InvalidPort {
                var: "PORT",
                value: "seventy".to_string()
            })
        );
    }
}
