// Environment snapshot, environment-mode detection, and logger setup.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Cached environment mode.
static ENV_MODE: OnceLock<EnvMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Production,
    Development,
    Test,
}

/// Detect the current environment mode from environment variables.
/// Checks `LATCHKEY_ENV` and `RUST_ENV` in order.
pub fn detect_env_mode() -> EnvMode {
    *ENV_MODE.get_or_init(|| {
        let env_val = std::env::var("LATCHKEY_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default()
            .to_lowercase();

        match env_val.as_str() {
            "production" | "prod" => EnvMode::Production,
            "test" | "testing" => EnvMode::Test,
            _ => EnvMode::Development,
        }
    })
}

pub fn is_production() -> bool {
    detect_env_mode() == EnvMode::Production
}

pub fn is_development() -> bool {
    detect_env_mode() == EnvMode::Development
}

pub fn is_test() -> bool {
    detect_env_mode() == EnvMode::Test
}

/// Initialize the `tracing` subscriber with appropriate defaults.
/// `RUST_LOG` wins when set; otherwise production gets `info`, everything
/// else `debug`.
pub fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production() {
            EnvFilter::new("latchkey=info")
        } else {
            EnvFilter::new("latchkey=debug")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}

// ─── Environment Snapshot ────────────────────────────────────────

/// An explicit snapshot of environment configuration.
///
/// Configuration assembly reads from a snapshot captured once at startup
/// rather than from ambient process state, so every key the surface
/// consumes is enumerable and testable. Empty-string values count as
/// absent: deployment tooling frequently exports empty placeholders, and
/// accepting one as a credential would defer the failure to the first
/// login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a key. Unset and empty values are both `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_present_values() {
        let env: EnvSource = [("GOOGLE_CLIENT_ID", "g1")].into_iter().collect();
        assert_eq!(env.get("GOOGLE_CLIENT_ID"), Some("g1"));
        assert_eq!(env.get("GOOGLE_CLIENT_SECRET"), None);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let env: EnvSource = [("GITHUB_CLIENT_ID", "")].into_iter().collect();
        assert_eq!(env.get("GITHUB_CLIENT_ID"), None);
    }
}
