// AuthOptions — the serializable configuration handed to the engine.
//
// Assembled once at startup by `latchkey::build_auth_config` and immutable
// afterwards. Provider credentials live in a BTreeMap so iteration order
// and structural equality are deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::providers::ProviderId;

/// Credential pair for a single OAuth provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// The secret must never reach logs or error output.
impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

// ─── Email & Password Options ────────────────────────────────────

/// Email and password authentication configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAndPasswordOptions {
    /// Enable email/password authentication (default: false).
    #[serde(default)]
    pub enabled: bool,

    /// Minimum password length (default: 8).
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Maximum password length (default: 128).
    #[serde(default = "default_max_password_length")]
    pub max_password_length: usize,
}

fn default_min_password_length() -> usize { 8 }
fn default_max_password_length() -> usize { 128 }

impl Default for EmailAndPasswordOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            min_password_length: default_min_password_length(),
            max_password_length: default_max_password_length(),
        }
    }
}

// ─── Missing Credential Policy ───────────────────────────────────

/// What to do when a provider's credential pair is only half present.
///
/// A provider with *neither* key set is simply not enabled under either
/// policy; this only governs partial pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingCredentialPolicy {
    /// Fail construction. Startup aborts rather than running with a
    /// silently narrowed login surface.
    #[default]
    Abort,
    /// Skip the provider and emit a warning.
    DisableProvider,
}

// ─── Auth Options ────────────────────────────────────────────────

/// Top-level configuration consumed by the authentication engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
    /// Email and password authentication configuration.
    #[serde(default)]
    pub email_and_password: EmailAndPasswordOptions,

    /// Social provider credentials, keyed by provider ID.
    #[serde(default)]
    pub social_providers: BTreeMap<ProviderId, ProviderCredentials>,

    /// Policy applied to partially-configured providers.
    #[serde(default)]
    pub on_missing_credential: MissingCredentialPolicy,
}

impl AuthOptions {
    /// Check structural invariants.
    ///
    /// Credential presence is enforced here as well as at assembly time, so
    /// options deserialized from a file get the same guarantees as options
    /// resolved from the environment.
    pub fn validate(&self) -> Result<()> {
        let pw = &self.email_and_password;
        if pw.min_password_length > pw.max_password_length {
            return Err(ConfigError::InvalidOptions(format!(
                "minPasswordLength ({}) exceeds maxPasswordLength ({})",
                pw.min_password_length, pw.max_password_length
            )));
        }

        for (id, creds) in &self.social_providers {
            if creds.client_id.is_empty() {
                return Err(ConfigError::MissingCredential {
                    provider: *id,
                    key: id.config().client_id_env,
                });
            }
            if creds.client_secret.is_empty() {
                return Err(ConfigError::MissingCredential {
                    provider: *id,
                    key: id.config().client_secret_env,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize_from_empty_object() {
        let opts: AuthOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.email_and_password.enabled);
        assert_eq!(opts.email_and_password.min_password_length, 8);
        assert_eq!(opts.email_and_password.max_password_length, 128);
        assert!(opts.social_providers.is_empty());
        assert_eq!(opts.on_missing_credential, MissingCredentialPolicy::Abort);
    }

    #[test]
    fn camel_case_wire_format() {
        let mut opts = AuthOptions::default();
        opts.email_and_password.enabled = true;
        opts.social_providers.insert(
            ProviderId::Google,
            ProviderCredentials::new("g1", "s1"),
        );
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["emailAndPassword"]["enabled"], true);
        assert_eq!(json["socialProviders"]["google"]["clientId"], "g1");
        assert_eq!(json["socialProviders"]["google"]["clientSecret"], "s1");
    }

    #[test]
    fn validate_rejects_inverted_password_bounds() {
        let mut opts = AuthOptions::default();
        opts.email_and_password.min_password_length = 200;
        let err = opts.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions(_)));
    }

    #[test]
    fn validate_rejects_empty_secret() {
        let mut opts = AuthOptions::default();
        opts.social_providers.insert(
            ProviderId::Github,
            ProviderCredentials::new("id", ""),
        );
        let err = opts.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential {
                provider: ProviderId::Github,
                key: "GITHUB_CLIENT_SECRET",
            }
        ));
    }

    #[test]
    fn debug_redacts_client_secret() {
        let creds = ProviderCredentials::new("id-123", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("id-123"));
        assert!(!rendered.contains("super-secret"));
    }
}
