// Configuration assembly.
//
// Pure construction of an AuthConfig from an environment snapshot and a
// database adapter. No I/O happens here; database reachability is checked
// later by `init_auth_engine`.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use latchkey_core::env::EnvSource;
use latchkey_core::error::{ConfigError, Result};
use latchkey_core::options::{AuthOptions, MissingCredentialPolicy, ProviderCredentials};
use latchkey_core::providers::ProviderId;
use latchkey_core::DatabaseAdapter;

/// The assembled, immutable configuration consumed by the engine.
///
/// Constructed once at process start by [`build_auth_config`] and shared
/// read-only from then on.
#[derive(Clone)]
pub struct AuthConfig {
    options: AuthOptions,
    adapter: Arc<dyn DatabaseAdapter>,
}

impl AuthConfig {
    pub fn options(&self) -> &AuthOptions {
        &self.options
    }

    pub fn adapter(&self) -> &Arc<dyn DatabaseAdapter> {
        &self.adapter
    }

    /// Whether email/password login is enabled. Always true for configs
    /// produced by [`build_auth_config`].
    pub fn credential_auth_enabled(&self) -> bool {
        self.options.email_and_password.enabled
    }

    /// Credentials for one social provider, if it is enabled.
    pub fn social_provider(&self, id: ProviderId) -> Option<&ProviderCredentials> {
        self.options.social_providers.get(&id)
    }

    pub(crate) fn into_parts(self) -> (AuthOptions, Arc<dyn DatabaseAdapter>) {
        (self.options, self.adapter)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("options", &self.options)
            .field("dialect", &self.adapter.dialect())
            .finish()
    }
}

// Structural equality over the serializable portion; adapters compare by
// identity since a connection handle has no meaningful value equality.
impl PartialEq for AuthConfig {
    fn eq(&self, other: &Self) -> bool {
        self.options == other.options && Arc::ptr_eq(&self.adapter, &other.adapter)
    }
}

/// Assemble a validated [`AuthConfig`] using the default
/// missing-credential policy (abort on a partial pair).
pub fn build_auth_config(
    env: &EnvSource,
    adapter: Arc<dyn DatabaseAdapter>,
) -> Result<AuthConfig> {
    build_auth_config_with_policy(env, adapter, MissingCredentialPolicy::default())
}

/// Assemble a validated [`AuthConfig`] with an explicit policy for
/// providers whose credential pair is only half present.
///
/// Email/password login is enabled unconditionally. Every registry
/// provider with both environment keys present and non-empty is enabled;
/// a provider with neither key stays disabled.
pub fn build_auth_config_with_policy(
    env: &EnvSource,
    adapter: Arc<dyn DatabaseAdapter>,
    policy: MissingCredentialPolicy,
) -> Result<AuthConfig> {
    let mut options = AuthOptions::default();
    options.email_and_password.enabled = true;
    options.on_missing_credential = policy;

    for id in ProviderId::ALL {
        if let Some(creds) = resolve_provider(env, *id, policy)? {
            options.social_providers.insert(*id, creds);
        }
    }

    options.validate()?;
    Ok(AuthConfig { options, adapter })
}

/// Resolve one provider's credential pair from the environment snapshot.
fn resolve_provider(
    env: &EnvSource,
    id: ProviderId,
    policy: MissingCredentialPolicy,
) -> Result<Option<ProviderCredentials>> {
    let config = id.config();
    let client_id = env.get(config.client_id_env);
    let client_secret = env.get(config.client_secret_env);

    let missing_key = match (client_id, client_secret) {
        (Some(cid), Some(secret)) => {
            return Ok(Some(ProviderCredentials::new(cid, secret)));
        }
        (None, None) => return Ok(None),
        (None, Some(_)) => config.client_id_env,
        (Some(_), None) => config.client_secret_env,
    };

    match policy {
        MissingCredentialPolicy::Abort => Err(ConfigError::MissingCredential {
            provider: id,
            key: missing_key,
        }),
        MissingCredentialPolicy::DisableProvider => {
            warn!(
                provider = %id,
                key = missing_key,
                "credential pair incomplete, provider disabled"
            );
            Ok(None)
        }
    }
}
