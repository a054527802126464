// Error taxonomy for configuration assembly and engine startup.
//
// Every variant is fatal at startup: callers abort rather than continue
// with a partial configuration. Retry and backoff belong to the database
// client, not here.

use crate::providers::ProviderId;

/// Errors produced while assembling or initializing the auth configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required secret is absent for an enabled provider.
    #[error("missing credential for provider `{provider}`: environment key `{key}` is not set")]
    MissingCredential {
        provider: ProviderId,
        key: &'static str,
    },

    /// The supplied database handle cannot reach its database.
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// A provider key outside the known registry.
    #[error("unknown social provider `{0}`")]
    UnknownProvider(String),

    /// Structurally invalid options.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Unified result type for latchkey operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_provider_and_key() {
        let err = ConfigError::MissingCredential {
            provider: ProviderId::Github,
            key: "GITHUB_CLIENT_SECRET",
        };
        let msg = err.to_string();
        assert!(msg.contains("github"));
        assert!(msg.contains("GITHUB_CLIENT_SECRET"));
    }

    #[test]
    fn database_unavailable_carries_cause() {
        let err = ConfigError::DatabaseUnavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "database unavailable: connection refused"
        );
    }
}
