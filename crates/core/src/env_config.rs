//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Connection pool tuning read from `RECON_PG_*` variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: PG_POOL_IDLE_TIMEOUT_SECS,
        }
    }
}

impl PoolSettings {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_connections: env_parse_with_default(
                "RECON_PG_MAX_CONNECTIONS",
                defaults.max_connections,
            )
            .max(1),
            acquire_timeout_secs: env_parse_with_default(
                "RECON_PG_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
            idle_timeout_secs: env_parse_with_default(
                "RECON_PG_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a unique variable name, so parallel runs don't collide.
    fn set(var: &str, value: &str) {
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "RECON_TEST_ENV_PARSE_VALID_41822";
        set(var_name, "42");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_tolerates_surrounding_whitespace() {
        let var_name = "RECON_TEST_ENV_PARSE_WS_41823";
        set(var_name, " 7 ");
        let result: u64 = env_parse_with_default(var_name, 1);
        assert_eq!(result, 7);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "RECON_TEST_ENV_PARSE_INVALID_41824";
        set(var_name, "plenty");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "RECON_TEST_ENV_PARSE_MISSING_41825";
        unset(var_name);
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_pool_settings_default_matches_constants() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, PG_POOL_MAX_CONNECTIONS);
        assert_eq!(settings.acquire_timeout_secs, PG_POOL_ACQUIRE_TIMEOUT_SECS);
        assert_eq!(settings.idle_timeout_secs, PG_POOL_IDLE_TIMEOUT_SECS);
    }
}
